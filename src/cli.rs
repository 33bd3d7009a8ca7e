use std::path::PathBuf;

/// Parsed command-line invocation
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    /// Play the game, optionally with a custom configuration file
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(lexopt::Parser::from_env())
    }

    fn from_parser(mut parser: lexopt::Parser) -> Result<Cli, lexopt::Error> {
        use lexopt::Arg::*;
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => return Ok(Cli::Help),
                Short('V') | Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config })
    }
}
