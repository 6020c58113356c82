//! Feed stdin to a single channel in read-sized fragments, printing events
//! as they emit. Handy for eyeballing chunk behavior:
//!
//! ```text
//! printf '[[[WORD_MEANING]]]:{{hi}}[[[EXAMPLES]]]:{{}}' | cargo run --example stdin_stream
//! ```

use std::io::Read;

use glossa_core::ChannelParser;

fn main() {
    let mut parser = ChannelParser::new();
    let mut stdin = std::io::stdin();
    let mut buf = [0u8; 64];

    loop {
        let n = match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        };
        let fragment = String::from_utf8_lossy(&buf[..n]);
        parser.append(&fragment, |event| eprintln!("EVENT: {:?}", event));
    }
    parser.finish(|event| eprintln!("EVENT: {:?}", event));
}
