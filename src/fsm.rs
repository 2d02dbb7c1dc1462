use crossbeam_channel::{select, Receiver, Sender};

use crate::config::LiftSettings;
use crate::notifications::Notification;

// Target and queue only exist while moving, so "target is set iff moving"
// holds by construction.
#[derive(PartialEq, Debug, Clone)]
enum Mode {
    Idle,
    Moving {
        target: i32,
        queue: Vec<i32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stimulus {
    ButtonPress(i32),
    Arrival(i32),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("floor {floor} is outside the configured range {min}..={max}")]
pub struct FloorOutOfRange {
    pub floor: i32,
    pub min: i32,
    pub max: i32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LiftStatus {
    pub behaviour: String,
    pub floor: i32,
    pub target: Option<i32>,
    pub queue: Vec<i32>,
}

pub struct LiftController {
    mode: Mode,
    current_floor: i32,
    floor_range: Option<(i32, i32)>,
}

impl LiftController {
    pub fn new(ground_floor: i32) -> Self {
        LiftController {
            mode: Mode::Idle,
            current_floor: ground_floor,
            floor_range: None,
        }
    }

    /// Enables rejection of button presses outside `min..=max` on the
    /// checked entry point. `request_floor` itself stays unchecked.
    pub fn with_floor_range(mut self, min: i32, max: i32) -> Self {
        self.floor_range = Some((min, max));
        self
    }

    pub fn request_floor(&mut self, floor: i32) -> Vec<Notification> {
        match &mut self.mode {
            Mode::Idle => {
                self.mode = Mode::Moving { target: floor, queue: Vec::new() };
                vec![Notification::StartingToMove { floor }]
            },
            Mode::Moving { queue, .. } => {
                queue.push(floor);
                vec![Notification::Queued { floor }]
            },
        }
    }

    pub fn request_floor_checked(&mut self, floor: i32) -> Result<Vec<Notification>, FloorOutOfRange> {
        if let Some((min, max)) = self.floor_range {
            if floor < min || floor > max {
                return Err(FloorOutOfRange { floor, min, max });
            }
        }
        Ok(self.request_floor(floor))
    }

    pub fn arrive_at(&mut self, floor: i32) -> Vec<Notification> {
        match &mut self.mode {
            Mode::Idle => vec![Notification::AlreadyAtFloor { floor }],
            Mode::Moving { target, queue } => {
                // the sensor reading is ground truth, even if it disagrees
                // with the target
                self.current_floor = floor;
                let mut notifications = vec![Notification::Arrived { floor }];
                if queue.is_empty() {
                    self.mode = Mode::Idle;
                } else {
                    let next = queue.remove(0);
                    *target = next;
                    notifications.push(Notification::NextTarget { floor: next });
                }
                notifications
            },
        }
    }

    pub fn apply(&mut self, stimulus: Stimulus) -> Vec<Notification> {
        match stimulus {
            Stimulus::ButtonPress(floor) => self.request_floor(floor),
            Stimulus::Arrival(floor) => self.arrive_at(floor),
        }
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn target_floor(&self) -> Option<i32> {
        match &self.mode {
            Mode::Idle => None,
            Mode::Moving { target, .. } => Some(*target),
        }
    }

    pub fn pending_queue(&self) -> &[i32] {
        match &self.mode {
            Mode::Idle => &[],
            Mode::Moving { queue, .. } => queue,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.mode, Mode::Moving { .. })
    }

    pub fn behaviour(&self) -> &'static str {
        match self.mode {
            Mode::Idle => "idle",
            Mode::Moving { .. } => "moving",
        }
    }

    pub fn status(&self) -> LiftStatus {
        LiftStatus {
            behaviour: String::from(self.behaviour()),
            floor: self.current_floor,
            target: self.target_floor(),
            queue: self.pending_queue().to_vec(),
        }
    }
}

pub fn main(
    settings: LiftSettings,
    button_press_rx: Receiver<i32>,
    floor_sensor_rx: Receiver<i32>,
    notification_tx: Sender<Notification>,
    lift_status_tx: Sender<LiftStatus>,
) {
    let mut controller = match settings.floor_range {
        Some((min, max)) => LiftController::new(settings.ground_floor).with_floor_range(min, max),
        None => LiftController::new(settings.ground_floor),
    };

    if lift_status_tx.send(controller.status()).is_err() {
        return
    }

    loop {
        let notifications = select! {
            recv(button_press_rx) -> msg => {
                let floor = match msg {
                    Ok(floor) => floor,
                    Err(_) => return,
                };
                match controller.request_floor_checked(floor) {
                    Ok(notifications) => notifications,
                    Err(err) => {
                        println!("ignoring button press: {}", err);
                        continue
                    },
                }
            },
            recv(floor_sensor_rx) -> msg => {
                let floor = match msg {
                    Ok(floor) => floor,
                    Err(_) => return,
                };
                controller.arrive_at(floor)
            },
        };

        // for every handled stimulus: publish events and a status snapshot
        for notification in notifications {
            if notification_tx.send(notification).is_err() {
                return
            }
        }
        if lift_status_tx.send(controller.status()).is_err() {
            return
        }
    }
}
