//! Convert colors given on the command line into every notation of their family.
//!
//! ```text
//! cargo run --example convert -- "#ff6600" "hsla(24, 100%, 50%, 0.5)"
//! ```
//!
//! Input that is not a color is skipped and the last good conversion stays
//! on screen.

use chroma_codec::prelude::*;

const SAMPLES: [&str; 5] = [
    "#f60",
    "rgba(10, 20, 30, 0.5)",
    "not-a-color",
    "cmyk(0%, 60%, 100%, 0%)",
    "#0a141e80",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut shown: Option<Conversion> = None;

    for input in inputs {
        match convert_all(input) {
            Ok(conversion) => {
                println!("{input:>28}  [{}]", conversion.source);
                for (notation, text) in &conversion.outputs {
                    println!("{:>28}  {text}", notation.name());
                }
                println!();
                shown = Some(conversion);
            }
            Err(err) => match &shown {
                Some(last) => println!("{input:>28}  ignored ({err}), still showing {}\n", last.color),
                None => println!("{input:>28}  ignored ({err})\n"),
            },
        }
    }
}
