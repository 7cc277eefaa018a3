use crate::domain::{ExplanationSource, PboCommand};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// history の既定件数
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --model: PBO_MODEL より優先
    pub model: Option<String>,
    /// --output-dir: PBO_OUTPUT_DIR より優先
    pub output_dir: Option<PathBuf>,
    /// history サブコマンドが指定された
    pub history: bool,
    pub topic: Option<String>,
    /// -e / --explanation
    pub explanation: Option<String>,
    /// -f / --file
    pub file: Option<PathBuf>,
    pub limit: usize,
    pub show: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            model: None,
            output_dir: None,
            history: false,
            topic: None,
            explanation: None,
            file: None,
            limit: DEFAULT_HISTORY_LIMIT,
            show: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn help_arg() -> clap::Arg {
    clap::Arg::new("help")
        .short('h')
        .long("help")
        .help("Show this help message")
        .action(ArgAction::SetTrue)
}

/// 診断入力の引数（ルートと diagnose の両方に付ける）
fn diagnose_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::Arg::new("topic")
            .short('t')
            .long("topic")
            .value_name("topic")
            .help("Topic you are explaining (asked interactively when omitted)")
            .num_args(1),
    )
    .arg(
        clap::Arg::new("explanation")
            .short('e')
            .long("explanation")
            .value_name("text")
            .help("Your explanation text (asked interactively when omitted)")
            .num_args(1)
            .conflicts_with("file"),
    )
    .arg(
        clap::Arg::new("file")
            .short('f')
            .long("file")
            .value_name("path")
            .help("Read the explanation from a file")
            .value_parser(value_parser!(PathBuf))
            .num_args(1),
    )
}

fn build_clap_command() -> clap::Command {
    let root = clap::Command::new("pbo")
        .about("Proof by Output: diagnose your own explanation of a topic")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(help_arg())
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (default: $PBO_MODEL or gpt-5-mini)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("dir")
                .help("Record directory (default: $PBO_OUTPUT_DIR or outputs)")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(diagnose_args(
            clap::Command::new("diagnose")
                .about("Diagnose an explanation (default command)")
                .disable_help_flag(true)
                .arg(help_arg()),
        ))
        .subcommand(
            clap::Command::new("history")
                .about("List saved records, newest first")
                .disable_help_flag(true)
                .arg(help_arg())
                .arg(
                    clap::Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("n")
                        .help("Maximum number of records to list")
                        .value_parser(value_parser!(usize))
                        .default_value("50")
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("show")
                        .long("show")
                        .value_name("index")
                        .help("Show the full record at this 1-based index")
                        .value_parser(value_parser!(usize))
                        .num_args(1),
                ),
        );
    diagnose_args(root)
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let mut config = Config::default();
    // グローバル引数はサブコマンド側にも伝播するので、最も深い matches から読む
    let leaf = match matches.subcommand() {
        Some(("history", sub)) => {
            config.history = true;
            config.limit = sub
                .get_one::<usize>("limit")
                .copied()
                .unwrap_or(DEFAULT_HISTORY_LIMIT);
            config.show = sub.get_one::<usize>("show").copied();
            sub
        }
        Some((_, sub)) => {
            read_diagnose_args(sub, &mut config);
            sub
        }
        None => {
            read_diagnose_args(matches, &mut config);
            matches
        }
    };
    config.help = matches.get_flag("help") || leaf.get_flag("help");
    config.verbose = leaf.get_flag("verbose");
    config.model = leaf.get_one::<String>("model").cloned();
    config.output_dir = leaf.get_one::<PathBuf>("output-dir").cloned();
    config
}

fn read_diagnose_args(matches: &clap::ArgMatches, config: &mut Config) {
    config.topic = matches.get_one::<String>("topic").cloned();
    config.explanation = matches.get_one::<String>("explanation").cloned();
    config.file = matches.get_one::<PathBuf>("file").cloned();
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "pbo", &mut std::io::stdout());
}

/// Config を PboCommand に変換する
pub fn config_to_command(config: Config) -> PboCommand {
    if config.help {
        return PboCommand::Help;
    }

    if config.history {
        return PboCommand::History {
            limit: config.limit,
            show: config.show,
        };
    }

    let explanation = match (config.explanation, config.file) {
        (Some(text), _) => ExplanationSource::Text(text),
        (None, Some(path)) => ExplanationSource::File(path),
        (None, None) => ExplanationSource::Interactive,
    };
    PboCommand::Diagnose {
        topic: config.topic,
        explanation,
    }
}
