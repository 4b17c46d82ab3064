use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::lifecycle;

/// Create a timesheet through the lifecycle-aware document API.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        start,
        end,
        hours,
        notes,
    } = cmd
    {
        let registry = lifecycle::bootstrap();
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            &registry,
            employee,
            hours.unwrap_or(cfg.default_hours),
            start,
            end,
            notes.clone(),
        )?;
    }

    Ok(())
}
