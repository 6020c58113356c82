use glossa_core::{ChannelParser, Event};

fn main() {
    let input = "[[[WORD_MEANING]]]:{{A tiny word.}}\
                 [[[EXAMPLES]]]:{{[[ITEM]]{{First ex.}}[[ITEM]]{{Second ex.}}}}";

    println!("Input: {:?}\n", input);
    println!("Events:");

    let mut parser = ChannelParser::new();
    let mut show = |event: Event| match &event {
        Event::MeaningChunk { text } => println!("  MeaningChunk: {:?}", text),
        Event::ItemChunk { index, text } => println!("  ItemChunk[{}]: {:?}", index, text),
        Event::ItemComplete { index, text } => println!("  ItemComplete[{}]: {:?}", index, text),
        _ => println!("  {:?}", event),
    };
    parser.append(input, &mut show);
    parser.finish(&mut show);
}
