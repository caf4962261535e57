use clap::Parser;
use map_reduce_core::Config;
use std::path::PathBuf;

/// Count word frequencies in a text file with an in-process map-reduce
#[derive(Parser, Debug)]
#[command(name = "map-reduce-task-channels", version)]
pub struct Cli {
    /// Line-delimited text file to analyse
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Number of words to print
    #[arg(short = 'n', long = "top")]
    pub top_n: Option<usize>,

    /// Slots in the mapper -> collector conduit
    #[arg(long)]
    pub emission_buffer: Option<usize>,

    /// Cap on live mapper tasks (0 = unbounded)
    #[arg(long)]
    pub max_map_tasks: Option<usize>,

    /// Cap on live reducer tasks (0 = unbounded)
    #[arg(long)]
    pub max_reduce_tasks: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line values take precedence over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(emission_buffer) = self.emission_buffer {
            config.emission_buffer = emission_buffer;
        }
        if let Some(max_map_tasks) = self.max_map_tasks {
            config.max_map_tasks = max_map_tasks;
        }
        if let Some(max_reduce_tasks) = self.max_reduce_tasks {
            config.max_reduce_tasks = max_reduce_tasks;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wc", "book.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("book.txt"));
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.top_n, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "wc",
            "book.txt",
            "-n",
            "5",
            "--max-reduce-tasks",
            "16",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.max_reduce_tasks, 16);
        assert_eq!(config.max_map_tasks, 0);
        assert_eq!(config.emission_buffer, Config::default().emission_buffer);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["wc"]).is_err());
    }
}
