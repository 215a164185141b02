use clap::Parser;
use std::path::PathBuf;

/// Evaluates one PromptChain node. The request is read from REQUEST or stdin.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "prompt-chain")]
#[command(about = "Evaluate a PromptChain node from a JSON request")]
pub struct CliArgs {
    /// Request JSON file; stdin when omitted
    #[arg(value_name = "REQUEST")]
    pub request_path: Option<PathBuf>,

    /// Node type (prompt_chain, prompt_chain_simple, prompt_chain_preview)
    #[arg(long = "node", value_name = "TYPE")]
    pub node_type: Option<String>,

    /// Fixed random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,

    /// List node types and exit
    #[arg(long)]
    pub list: bool,

    /// Write the effective settings to the config file
    #[arg(long)]
    pub save_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("prompt-chain").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_flags_and_path() {
        let args = parse(&["--seed", "42", "--node", "prompt_chain_simple", "--pretty", "req.json"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.node_type.as_deref(), Some("prompt_chain_simple"));
        assert!(args.pretty);
        assert_eq!(args.request_path, Some(PathBuf::from("req.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_list_and_save_config() {
        let args = parse(&["--list", "--save-config"]).unwrap();
        assert!(args.list);
        assert!(args.save_config);
    }
}
