use std::thread;
use std::time::Duration;

use crossbeam_channel::unbounded;

pub mod config;
pub mod debug;
pub mod fsm;
pub mod notifications;

use fsm::Stimulus;

fn main() -> crossterm::Result<()> {
    // READ CONFIGURATION
    let config = config::LiftConfig::get();

    // INITIALIZE CHANNELS
    let (button_press_tx, button_press_rx) = unbounded();
    let (floor_sensor_tx, floor_sensor_rx) = unbounded();
    let (notification_tx, notification_rx) = unbounded();
    let (lift_status_tx, lift_status_rx) = unbounded();

    // INITIALIZE THREAD FOR STATE MACHINE
    {
        let settings = config.lift.clone();
        thread::spawn(move || fsm::main(
            settings,
            button_press_rx,
            floor_sensor_rx,
            notification_tx,
            lift_status_tx,
        ));
    }

    // INITIALIZE THREAD FOR STATUS DISPLAY
    let display = thread::spawn(move || debug::main(
        lift_status_rx,
        notification_rx,
    ));

    // DRIVE THE DEMO SCENARIO
    let scenario = [
        Stimulus::ButtonPress(3),
        Stimulus::Arrival(3),
        Stimulus::ButtonPress(5),
        Stimulus::ButtonPress(2),
        Stimulus::Arrival(5),
        Stimulus::Arrival(2),
    ];
    for stimulus in scenario {
        match stimulus {
            Stimulus::ButtonPress(floor) => button_press_tx.send(floor).unwrap(),
            Stimulus::Arrival(floor) => floor_sensor_tx.send(floor).unwrap(),
        }
        thread::sleep(Duration::from_millis(500));
    }

    // dropping the stimulus channels shuts the pipeline down
    drop(button_press_tx);
    drop(floor_sensor_tx);
    display.join().unwrap()?;
    Ok(())
}
