use std::fmt;

/// Events emitted by the lift state machine. Callers decide how to render
/// them; `Display` gives the human-readable line for each.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    StartingToMove { floor: i32 },
    Queued { floor: i32 },
    AlreadyAtFloor { floor: i32 },
    Arrived { floor: i32 },
    NextTarget { floor: i32 },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::StartingToMove { floor } =>
                write!(f, "Button for floor {} pressed. Lift starting to move.", floor),
            Notification::Queued { floor } =>
                write!(f, "Already moving. Added floor {} to queue.", floor),
            Notification::AlreadyAtFloor { .. } =>
                write!(f, "Lift is idle. Already at the floor."),
            Notification::Arrived { floor } =>
                write!(f, "Lift arrived at floor {}. Doors opening.", floor),
            Notification::NextTarget { floor } =>
                write!(f, "Next target: floor {}", floor),
        }
    }
}
