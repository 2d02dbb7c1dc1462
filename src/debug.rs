use std::io::{stdout, Stdout, Write};

use crossbeam_channel::{select, Receiver};
use crossterm::{cursor, terminal, Result, ExecutableCommand};

use crate::fsm::LiftStatus;
use crate::notifications::Notification;

const LOG_DEPTH: usize = 8;
const STATUS_SIZE: u16 = 11 + LOG_DEPTH as u16;

pub fn main(
    lift_status_rx: Receiver<LiftStatus>,
    notification_rx: Receiver<Notification>,
) -> Result<()> {
    let mut stdout = stdout();

    // the fsm sends its initial snapshot before handling any stimulus, so
    // the first frame shows the configured ground floor
    let mut status = match lift_status_rx.recv() {
        Ok(status) => status,
        Err(_) => return Ok(()),
    };
    let mut log: Vec<String> = Vec::new();

    for _ in 0..STATUS_SIZE { writeln!(stdout, "")?; }
    printstatus(&mut stdout, &status, &log)?;

    loop {
        select! {
            recv(lift_status_rx) -> msg => {
                status = match msg {
                    Ok(status) => status,
                    Err(_) => return Ok(()),
                };
                printstatus(&mut stdout, &status, &log)?;
            },
            recv(notification_rx) -> msg => {
                let notification = match msg {
                    Ok(notification) => notification,
                    Err(_) => return Ok(()),
                };
                log.push(notification.to_string());
                if log.len() > LOG_DEPTH {
                    log.remove(0);
                }
                printstatus(&mut stdout, &status, &log)?;
            },
        }
    }
}

fn printstatus(
    stdout: &mut Stdout,
    status: &LiftStatus,
    log: &[String],
) -> Result<()> {
    stdout.execute(cursor::MoveUp(STATUS_SIZE))?;
    stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    writeln!(stdout, "+-------------------------+")?;
    writeln!(stdout, "| LIFT STATE MACHINE      |")?;
    writeln!(stdout, "+------------+------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} |", "STATE", status.behaviour)?;
    writeln!(stdout, "+------------+------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} |", "FLOOR", status.floor)?;
    writeln!(stdout, "+------------+------------+")?;
    let target = match status.target {
        Some(floor) => floor.to_string(),
        None => String::from("none"),
    };
    writeln!(stdout, "| {0:<10} | {1:<10} |", "TARGET", target)?;
    writeln!(stdout, "+------------+------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} |", "QUEUE", format!("{:?}", status.queue))?;
    writeln!(stdout, "+------------+------------+")?;

    for line in log {
        writeln!(stdout, "{}", line)?;
    }
    for _ in log.len()..LOG_DEPTH {
        writeln!(stdout, "")?;
    }

    Ok(())
}
