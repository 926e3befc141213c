use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

use tileweave::app::App;
use tileweave::cli::Opt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::from_args();

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    App::new(opt).run()
}
