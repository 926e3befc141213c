use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tileweave",
    about = "Generate connector-matched tilings in the terminal"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(short, long, help = "Random seed")]
    pub seed: Option<u64>,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, StructOpt)]
pub enum Command {
    #[structopt(about = "1-D dominoes stepping through numbered connectors")]
    Dominoes {
        #[structopt(short = "n", long, default_value = "10", help = "Number of cells")]
        size: usize,

        #[structopt(short, long, default_value = "6", help = "Number of connectors")]
        connectors: usize,

        #[structopt(long, help = "Wrap the strip into a loop")]
        cyclic: bool,
    },

    #[structopt(about = "2-D box-drawing tiles, single and double ruled")]
    Boxes {
        #[structopt(long, default_value = "16", help = "Grid width")]
        width: usize,

        #[structopt(long, default_value = "4", help = "Grid height")]
        height: usize,

        #[structopt(long, help = "Wrap horizontally")]
        cyclic_x: bool,

        #[structopt(long, help = "Wrap vertically")]
        cyclic_y: bool,
    },

    #[structopt(about = "2-D half-block tiles with polarised shade edges")]
    Blocks {
        #[structopt(short, long, default_value = "16", help = "Grid width")]
        width: usize,

        #[structopt(short, long, default_value = "8", help = "Grid height")]
        height: usize,

        #[structopt(long, help = "Wrap horizontally")]
        cyclic_x: bool,

        #[structopt(long, help = "Wrap vertically")]
        cyclic_y: bool,
    },
}
