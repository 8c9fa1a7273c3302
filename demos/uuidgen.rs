//! Simple command that prints UUID strings or reports on one
//!
//! ```text
//! uuidgen [-v 1|3|4|5] [-f default|hex|urn] [-n count] [--ns namespace --name name]
//! uuidgen info text
//! ```

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{Format, Namespace};

struct Options {
    version: u8,
    format: Format,
    count: usize,
    namespace: Option<Namespace>,
    name: Option<String>,
}

enum Command {
    Generate(Options),
    Info(String),
}

fn main() -> io::Result<ExitCode> {
    let mut args = env::args();
    let program = args.next();
    let program = program.as_deref().unwrap_or("uuidgen");
    let command = match parse_args(args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: {} [-v 1|3|4|5] [-f default|hex|urn] [-n count] [--ns namespace --name name]",
                program
            );
            eprintln!("       {} info text", program);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Info(text) => match rfc4122::info(&text) {
            Ok(e) => {
                writeln!(buf, "uuid: {}", e.uuid)?;
                writeln!(buf, "type: {}", e.format)?;
                writeln!(buf, "version: {}", e.version)?;
                writeln!(buf, "variant: {}", e.variant)?;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Generate(opts) => {
            for _ in 0..opts.count {
                match generate(&opts) {
                    Ok(text) => writeln!(buf, "{}", text)?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn generate(opts: &Options) -> Result<String, rfc4122::Error> {
    let name = opts.name.as_deref().unwrap_or_default();
    let namespace = opts.namespace.unwrap_or(Namespace::Nil);
    match opts.version {
        1 => rfc4122::generate_v1(opts.format),
        3 => Ok(rfc4122::generate_v3(namespace, name, opts.format)),
        5 => Ok(rfc4122::generate_v5(namespace, name, opts.format)),
        _ => rfc4122::generate_v4(opts.format),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut opts = Options {
        version: 4,
        format: Format::Default,
        count: 1,
        namespace: None,
        name: None,
    };
    let mut seen: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "info" && seen.is_empty() {
            let Some(text) = args.next() else {
                return Err("argument to command 'info' missing".to_owned());
            };
            if let Some(extra) = args.next() {
                return Err(format!("unrecognized argument '{}'", extra));
            }
            return Ok(Command::Info(text));
        }

        if !matches!(arg.as_str(), "-v" | "-f" | "-n" | "--ns" | "--name") {
            return Err(format!("unrecognized argument '{}'", arg));
        }
        if seen.contains(&arg) {
            return Err(format!("option '{}' given more than once", arg));
        }
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", arg));
        };

        match arg.as_str() {
            "-v" => {
                opts.version = match value.parse::<u8>() {
                    Ok(v @ (1 | 3 | 4 | 5)) => v,
                    _ => return Err(format!("invalid argument to option '-v': '{}'", value)),
                }
            }
            "-f" => opts.format = value.parse().map_err(|err| format!("{}", err))?,
            "-n" => {
                let Ok(c) = value.parse() else {
                    return Err(format!("invalid argument to option '-n': '{}'", value));
                };
                opts.count = c;
            }
            "--ns" => opts.namespace = Some(value.parse().map_err(|err| format!("{}", err))?),
            _ => opts.name = Some(value),
        }
        seen.push(arg);
    }

    let name_based = opts.version == 3 || opts.version == 5;
    if name_based && (opts.namespace.is_none() || opts.name.is_none()) {
        return Err("options '--ns' and '--name' are required for versions 3 and 5".to_owned());
    }
    if !name_based && (opts.namespace.is_some() || opts.name.is_some()) {
        return Err("options '--ns' and '--name' apply to versions 3 and 5 only".to_owned());
    }
    Ok(Command::Generate(opts))
}
