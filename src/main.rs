use clap::Parser;
use log::error;
use random_photo_selector::component::PhotoSelector;
use random_photo_selector::config::{SelectorArgs, SelectorConfig};
use random_photo_selector::init;
use random_photo_selector::signal::shutdown_signal_or_unset;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = SelectorArgs::parse();
    let log_file = args.log_file.clone();

    // 參數不合法時不寫入任何檔案，記錄檔也不例外
    let config = match SelectorConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            init::init_logging(None);
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    init::init_logging(Some(&log_file));

    let shutdown_signal = shutdown_signal_or_unset();
    let selector = PhotoSelector::new(config, shutdown_signal);

    match selector.run() {
        Ok((_, summary)) => {
            selector.print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
