use crate::config::PlotConfig;
use argh::FromArgs;
use std::path::PathBuf;

/// Plot the latency distribution stored in a histogram (percentile) file
#[derive(FromArgs, Debug)]
pub struct Args {
    /// the histogram file
    #[argh(option, short = 'H')]
    pub histogram_file: PathBuf,

    /// upper bound of the latency axis of the count histogram (default: 2000)
    #[argh(option, short = 'm', default = "crate::config::DEFAULT_MAX_DELAY")]
    pub max_delay: u32,

    /// width of a single histogram bin (default: 10)
    #[argh(option, short = 's', default = "crate::config::DEFAULT_DELAY_STEP")]
    pub delay_step: u32,

    /// where to write the chart page (default: <temp dir>/<file stem>-latency.html)
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// write the chart page without opening it in a browser
    #[argh(switch)]
    pub no_open: bool,

    /// also write the chart data as JSON to this path
    #[argh(option)]
    pub export: Option<PathBuf>,

    /// print the non-empty histogram bins as a table
    #[argh(switch)]
    pub print_buckets: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Args {
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            max_delay: self.max_delay,
            delay_step: self.delay_step,
        }
    }
}
