use anyhow::Result;

pub mod args;
mod check;
pub mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(root) = args.path_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let reporter = check::check(&args, root)?;
    report::print(&reporter, args.verbose);

    Ok(ExitStatus::from_reporter(&reporter))
}
