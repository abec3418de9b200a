use std::io::{self, Write};

use tenpin_engine::ScoreTracker;

/// Writes the recorded frames, their running totals and the final score.
pub fn write_card<W>(writer: &mut W, tracker: &ScoreTracker) -> io::Result<()>
where
    W: Write,
{
    let card = tracker.score_card();

    writeln!(writer, "frame  rolls       extra  total")?;
    let frames = card.frames().iter().enumerate().skip(1);
    for ((index, frame), total) in frames.zip(card.running_totals()) {
        writeln!(
            writer,
            "{index:>5}  {:>3} {:>3}  {:>8}  {total:>5}",
            frame.first(),
            frame.second(),
            frame.extra(),
        )?;
    }

    let state = if tracker.is_finished() {
        "final"
    } else {
        "in progress"
    };
    writeln!(
        writer,
        "score: {} ({state})",
        tracker.calculate_final_score()
    )?;
    Ok(())
}
