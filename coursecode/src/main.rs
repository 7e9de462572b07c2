use clap::Parser;
use options::Options;

use crate::{model::ParsedInput, options::DataFormat};

mod model;
mod options;

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Options::parse();

    let parsed: Vec<ParsedInput> = args
        .inputs
        .into_iter()
        .map(|input| {
            let result = coursecode_lib::parse(&input);
            ParsedInput::from((input, result))
        })
        .collect();
    let failed = parsed.iter().filter(|parsed| !parsed.is_ok()).count();
    log::info!("parsed {} inputs, {failed} failed", parsed.len());

    let result = match args.format {
        DataFormat::Json => match args.pretty {
            true => serde_json::to_string_pretty(&parsed)?,
            false => serde_json::to_string(&parsed)?,
        },
        DataFormat::Text => parsed
            .iter()
            .map(|parsed| match (&parsed.course, &parsed.error) {
                (Some(course), _) => course.to_string(),
                (None, Some(err)) => format!("error: {err}"),
                (None, None) => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    println!("{result}");

    match args.strict && failed > 0 {
        true => Err(Error::InputsRejected(failed)),
        false => Ok(()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    JsonSerializeFailed(#[from] serde_json::Error),
    #[error("{0} input(s) could not be parsed with `--strict` passed")]
    InputsRejected(usize),
}
