use clap::Parser;
use tracing_subscriber::EnvFilter;

use invest_calc::{app, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 명령행을 해석한 뒤 계산 결과를 출력한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match app::run(&cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("오류: {err}");
            std::process::exit(1);
        }
    }
}
