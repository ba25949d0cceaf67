use crate::core::system::System;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;

mod core;
mod r#macro;
mod model;
mod ui;
mod utils;

fn main() {
    let _logging_guard = Logging::initialize();
    if let Err(error) = System::run() {
        crate::log!(error);
        std::process::exit(1);
    }
    SystemLog::TerminateComplete.log();
}
