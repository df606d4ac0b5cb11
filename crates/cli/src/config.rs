// crates/cli/src/config.rs
use crate::args::Args;
use word_count_engine::options::OptionSet;
use word_count_engine::source::Input;

/// Resolved invocation: the effective option set plus the ordered inputs.
#[derive(Debug)]
pub struct Config {
    pub options: OptionSet,
    pub inputs: Vec<Input>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let options = OptionSet::resolve(args.bytes, args.lines, args.words, args.chars);

        let inputs = if args.files.is_empty() {
            vec![Input::Stdin]
        } else {
            args.files.into_iter().map(Input::File).collect()
        };

        Self { options, inputs }
    }
}
