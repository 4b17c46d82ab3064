use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::db::store::TimesheetFilter;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        year,
        month,
        week,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let filter = TimesheetFilter {
            year: *year,
            month: *month,
            week: *week,
        };
        let rows = ListLogic::load(&mut pool, &filter)?;

        if *json {
            println!("{}", ListLogic::to_json(&rows)?);
        } else {
            ListLogic::print(&rows);
        }
    }
    Ok(())
}
