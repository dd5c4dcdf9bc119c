use std::panic;
use std::process;

use json_validate::{pipeline, Cli, Config, Output, ValidationTarget};

fn main() {
    let cli = Cli::parse_args();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(2);
    }

    let config = Config::from_cli(&cli);
    let output = Output::new(config.verbosity());

    let target = ValidationTarget {
        document_path: config.json_file.clone(),
        schema_path: config.schema.clone(),
        size_limit_bytes: config.size_limit_bytes(),
        skip_size_check: config.no_size_check,
    };

    // Every anticipated failure comes back as a typed error; a panic here is
    // a fault outside the taxonomy and is converted to output only at this
    // outermost boundary.
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(|| pipeline::run(&target));
    let _ = panic::take_hook();

    match outcome {
        Ok(Ok(())) => {
            println!(
                "{}",
                output.format_success(&config.json_file, config.schema.as_deref())
            );
        }
        Ok(Err(error)) => {
            eprintln!("{}", output.format_error(&error));
            process::exit(1);
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown internal failure".to_string());
            eprintln!("{}", output.format_unexpected(&detail));
            process::exit(1);
        }
    }
}
