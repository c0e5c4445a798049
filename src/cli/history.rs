use anyhow::Result;
use dietplan::config::Config;
use dietplan::export::render_history_line;
use dietplan::history_log::HistoryLog;

pub fn history(config: Config, limit: Option<usize>) -> Result<()> {
    let log = HistoryLog::new(&config.history.path);
    let entries = log.entries()?;

    if entries.is_empty() {
        println!("No history available yet.");
        return Ok(());
    }

    let skip = limit.map_or(0, |limit| entries.len().saturating_sub(limit));
    for entry in &entries[skip..] {
        println!("{}", render_history_line(&entry.date, &entry.summary));
    }

    Ok(())
}
