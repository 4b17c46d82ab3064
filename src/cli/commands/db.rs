use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Timesheets whose `timesheet_date_id` references no row.
fn dangling_relations(pool: &DbPool) -> AppResult<usize> {
    let mut stmt = pool.conn.prepare("PRAGMA foreign_key_check(timesheets);")?;
    let n = stmt.query_map([], |_| Ok(()))?.count();
    Ok(n)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let n = run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed ({} applied).{}\n", GREEN, n, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
            for v in applied_versions(&pool.conn)? {
                println!("  migration {}", v);
            }
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            let dangling = dangling_relations(&pool)?;

            if integrity == "ok" && dangling == 0 {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else if integrity != "ok" {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            } else {
                println!(
                    "{}✘ Integrity check failed:{} {} timesheet(s) point at a missing timesheet-date\n",
                    RED, RESET, dangling
                );
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
