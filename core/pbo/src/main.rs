mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::process;

use cli::input::collect_input;
use cli::render::{render_history, render_record, render_result};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{ExplanationSource, PboCommand};
use ports::inbound::UseCaseRunner;
use wiring::{wire_pbo, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        self.log(LogRecord::new(LogLevel::Info, "command started").field("command", command_name));

        let result = match cmd {
            PboCommand::Help => {
                print_help();
                Ok(0)
            }
            PboCommand::Diagnose { topic, explanation } => self.diagnose(topic, explanation),
            PboCommand::History { limit, show } => self.history(limit, show),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string()).layer("cli").kind("error"));
        }
        result
    }
}

impl Runner {
    fn diagnose(&self, topic: Option<String>, explanation: ExplanationSource) -> Result<i32, Error> {
        // 入力を尋ねる前にキーの有無を確かめる
        self.app.config.require_api_key()?;
        let use_case = self.app.diagnose_use_case()?;

        let (topic, explanation) = {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut prompt_out = io::stderr();
            collect_input(
                self.app.fs.as_ref(),
                topic,
                explanation,
                &mut input,
                &mut prompt_out,
            )?
        };

        eprintln!("診断中…（model: {}）", self.app.config.model);
        let diagnosis = use_case.submit(&topic, &explanation)?;

        let mut out = io::stdout().lock();
        render_result(&mut out, &diagnosis.result)?;
        out.flush()?;

        let path = diagnosis.saved?;
        println!();
        println!("保存しました: {}", path.display());
        Ok(0)
    }

    fn history(&self, limit: usize, show: Option<usize>) -> Result<i32, Error> {
        let mut out = io::stdout().lock();
        match show {
            Some(index) => {
                let stored = self.app.history.get(limit, index)?;
                render_record(&mut out, &stored)?;
            }
            None => {
                let records = self.app.history.list(limit)?;
                render_history(&mut out, &records)?;
            }
        }
        out.flush()?;
        Ok(0)
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli").kind("lifecycle"));
    }
}

fn cmd_name_for_log(cmd: &PboCommand) -> &'static str {
    match cmd {
        PboCommand::Help => "help",
        PboCommand::Diagnose { .. } => "diagnose",
        PboCommand::History { .. } => "history",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("pbo: {}", e);
            if let Some(raw) = e.raw_reply() {
                eprintln!("--- LLM の応答（原文） ---");
                eprintln!("{}", raw);
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // .env は任意。無ければプロセスの環境変数だけを使う
    dotenvy::dotenv().ok();
    let app = wire_pbo(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: pbo [diagnose] [-t topic] [-f path | -e text] | pbo history [-n n] [--show index]");
}

fn print_help() {
    println!("Usage: pbo [options] [diagnose] [-t topic] [-f path | -e text]");
    println!("       pbo [options] history [-n n] [--show index]");
    println!();
    println!("Commands:");
    println!("  diagnose (default)            Diagnose your explanation of a topic and save the record");
    println!("  history                       List saved records, newest first");
    println!();
    println!("Diagnose options:");
    println!("  -t, --topic <topic>           Topic you are explaining (asked interactively when omitted)");
    println!("  -e, --explanation <text>      Your explanation (asked interactively when omitted; at least 60 characters)");
    println!("  -f, --file <path>             Read the explanation from a file");
    println!();
    println!("History options:");
    println!("  -n, --limit <n>               Maximum number of records to list (default: 50)");
    println!("  --show <index>                Show the full record at this 1-based index");
    println!();
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -m, --model <model>           Model name (default: $PBO_MODEL or gpt-5-mini)");
    println!("  -o, --output-dir <dir>        Record directory (default: $PBO_OUTPUT_DIR or outputs)");
    println!("  -v, --verbose                 Mirror structured logs to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment (a .env file in the current directory is loaded when present):");
    println!("  OPENAI_API_KEY     API key for the chat completions endpoint (required for diagnose)");
    println!("  PBO_MODEL          Model name");
    println!("  PBO_BASE_URL       Endpoint base URL (default: https://api.openai.com/v1)");
    println!("  PBO_TIMEOUT_SECS   Request timeout in seconds (default: 120)");
    println!("  PBO_OUTPUT_DIR     Record directory");
    println!("  PBO_LOG_FILE       Structured log file (default: logs/pbo.jsonl)");
    println!();
    println!("Examples:");
    println!("  pbo -t 'TypeScriptのUnion型' -f note.txt");
    println!("  pbo history -n 10");
    println!("  pbo history --show 1");
}
