//! Example showing a dynamic total next to a fixed one

use barstate::bar::BarOption;
use barstate::decor;
use barstate::progress::Progress;
use color_eyre::Result;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut progress = Progress::new().with_width(40);

    // Work is discovered as we go: grow by 50 whenever 10% or less remains.
    let mut crawl = progress.add_bar(
        100,
        [
            BarOption::PrependDecorators(vec![decor::name("crawl")]),
            BarOption::AppendDecorators(vec![decor::counters(), decor::eta()]),
            BarOption::AutoIncrTotal {
                trigger: 10,
                amount: 50,
            },
        ],
    )?;

    let mut fixed = progress.add_bar(
        300,
        [
            BarOption::PrependDecorators(vec![decor::name("fixed")]),
            BarOption::AppendDecorators(vec![decor::percentage(), decor::eta()]),
            BarOption::EtaAlpha(0.5),
            BarOption::RemoveOnComplete,
        ],
    )?;

    let mut last = Instant::now();
    for step in 0..300u64 {
        thread::sleep(Duration::from_millis(10 + step % 7 * 5));
        let elapsed = last.elapsed();
        last = Instant::now();

        crawl.report(elapsed, 1 + step % 3);
        fixed.report(elapsed, 1);
    }

    // The crawl is over: pin the total to what was actually done.
    let done = crawl.state().current();
    crawl.set_total(done, true);

    crawl.finish();
    fixed.finish();

    println!("\nCrawled {done} items.");

    Ok(())
}
