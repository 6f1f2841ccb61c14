use std::{fs, thread};

use clap::{Parser, builder::RangedU64ValueParser};
use seta::{
    interpreter::evaluator::core::{Config, Context, MAX_CALL_DEPTH},
    run_in,
};

/// Largest call depth accepted on the command line.
const DEPTH_CEILING: usize = 10_000;

/// Stack reserved for the interpreter thread regardless of the depth.
const BASE_STACK: usize = 8 * 1024 * 1024;

/// Stack reserved for each nested seta call.
const STACK_PER_CALL: usize = 128 * 1024;

/// seta is a small scripting language with numbers, strings, arrays,
/// conditionals and functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells seta to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the value of the
    /// last statement of a seta script, unless it is nil.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Maximum number of nested function calls before the script is aborted.
    #[arg(short = 'd',
          long,
          default_value_t = MAX_CALL_DEPTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=DEPTH_CEILING as u64))]
    max_depth: usize,

    contents: String,
}

/// Size of the interpreter thread's stack for the given call depth.
const fn stack_size(max_depth: usize) -> usize {
    BASE_STACK + max_depth * STACK_PER_CALL
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config { max_call_depth: args.max_depth };
    let pipe_mode = args.pipe_mode;

    // Each seta call nests a few host frames.
    let outcome =
        thread::Builder::new().name("seta".to_string())
                              .stack_size(stack_size(config.max_call_depth))
                              .spawn(move || {
                                  let mut context = Context::new().with_config(config);
                                  run_in(&script, &mut context, pipe_mode).map_err(|e| e.to_string())
                              })
                              .map(thread::JoinHandle::join);

    match outcome {
        Ok(Ok(Ok(()))) => {},
        Ok(Ok(Err(message))) => {
            eprintln!("{message}");
            std::process::exit(1);
        },
        Ok(Err(_)) => {
            eprintln!("The interpreter stopped unexpectedly.");
            std::process::exit(1);
        },
        Err(e) => {
            eprintln!("Failed to start the interpreter: {e}");
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use seta::{interpret, interpreter::value::output::BufferOutput};

    use super::*;

    #[test]
    fn max_depth_defaults_to_the_library_limit() {
        let args = Args::try_parse_from(["seta", "1 + 1"]).unwrap();
        assert_eq!(args.max_depth, MAX_CALL_DEPTH);
    }

    #[test]
    fn max_depth_is_capped() {
        assert!(Args::try_parse_from(["seta", "-d", "100000", "1"]).is_err());
        assert!(Args::try_parse_from(["seta", "-d", "0", "1"]).is_err());

        let args = Args::try_parse_from(["seta", "--max-depth", "10000", "1"]).unwrap();
        assert_eq!(args.max_depth, DEPTH_CEILING);
    }

    #[test]
    fn deep_recursion_within_the_ceiling_reports_an_error() {
        let config = Config { max_call_depth: 2_000 };
        let script = "fn down(n) -> down(n + 1) . down(0)";

        let outcome = thread::Builder::new().stack_size(stack_size(config.max_call_depth))
                                            .spawn(move || {
                                                let output = Box::new(BufferOutput::new());
                                                let mut context =
                                                    Context::with_output(output).with_config(config);
                                                interpret(script, &mut context).map(|value| format!("{value:?}"))
                                                                                .map_err(|e| e.to_string())
                                            })
                                            .unwrap()
                                            .join()
                                            .unwrap();

        assert_eq!(outcome.unwrap_err(), "Recursion too deep: more than 2000 nested calls.");
    }
}
