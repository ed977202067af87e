//! Telephony state tracking
//!
//! Keeps an advisory "phone is busy" flag in sync with call state
//! transitions, and answers whether the SIM unlock panel is in front of
//! the user. Both exist so peek decisions can defer to the phone app.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Call state as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// No call activity
    Idle,
    /// An incoming call is ringing
    Ringing,
    /// At least one call is dialing, active or on hold
    OffHook,
    /// A state this build does not recognize
    Other(i32),
}

impl CallState {
    /// Map a raw platform value to a call state
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => CallState::Idle,
            1 => CallState::Ringing,
            2 => CallState::OffHook,
            other => CallState::Other(other),
        }
    }

    /// Stable token, without the raw payload
    pub fn as_str(&self) -> &'static str {
        match self {
            CallState::Idle => "idle",
            CallState::Ringing => "ringing",
            CallState::OffHook => "offhook",
            CallState::Other(_) => "other",
        }
    }
}

impl std::fmt::Display for CallState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallState::Other(raw) => write!(f, "other({})", raw),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl FromStr for CallState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "idle" => Ok(CallState::Idle),
            "ringing" => Ok(CallState::Ringing),
            "offhook" => Ok(CallState::OffHook),
            other => other
                .parse::<i32>()
                .map(CallState::from_raw)
                .map_err(|_| anyhow!("无法识别的通话状态: {}", s)),
        }
    }
}

/// Tracks whether a call is ringing or connected
///
/// The flag is advisory: it answers "was the last relevant transition
/// into a busy state", nothing stronger. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CallMonitor {
    busy: Arc<AtomicBool>,
}

impl CallMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one call state transition to the flag
    ///
    /// Ringing and offhook raise the flag, idle clears it, anything
    /// else leaves it untouched.
    pub fn on_call_state_changed(&self, state: CallState) {
        match state {
            CallState::Ringing | CallState::OffHook => {
                self.busy.store(true, Ordering::Relaxed);
            }
            CallState::Idle => {
                self.busy.store(false, Ordering::Relaxed);
            }
            CallState::Other(_) => {}
        }
        debug!(
            state = %state,
            busy = self.is_ringing_or_connected(),
            "Call state changed"
        );
    }

    /// Whether the phone is currently ringing or in a call
    pub fn is_ringing_or_connected(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }

    /// Consume call state transitions from a channel until it closes
    pub fn spawn(&self, mut rx: mpsc::Receiver<CallState>) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            while let Some(state) = rx.recv().await {
                monitor.on_call_state_changed(state);
            }
            debug!("Call state channel closed");
        })
    }
}

/// SIM card state as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Unknown,
    Absent,
    PinRequired,
    PukRequired,
    NetworkLocked,
    Ready,
    /// A state this build does not recognize
    Other(i32),
}

impl SimState {
    /// Map a raw platform value to a SIM state
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => SimState::Unknown,
            1 => SimState::Absent,
            2 => SimState::PinRequired,
            3 => SimState::PukRequired,
            4 => SimState::NetworkLocked,
            5 => SimState::Ready,
            other => SimState::Other(other),
        }
    }

    /// Whether this state demands an unlock interaction from the user
    pub fn requires_unlock(&self) -> bool {
        matches!(
            self,
            SimState::PinRequired | SimState::PukRequired | SimState::NetworkLocked
        )
    }

    /// Stable token, without the raw payload
    pub fn as_str(&self) -> &'static str {
        match self {
            SimState::Unknown => "unknown",
            SimState::Absent => "absent",
            SimState::PinRequired => "pin_required",
            SimState::PukRequired => "puk_required",
            SimState::NetworkLocked => "network_locked",
            SimState::Ready => "ready",
            SimState::Other(_) => "other",
        }
    }
}

impl std::fmt::Display for SimState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimState::Other(raw) => write!(f, "other({})", raw),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl FromStr for SimState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unknown" => Ok(SimState::Unknown),
            "absent" => Ok(SimState::Absent),
            "pin" | "pin_required" => Ok(SimState::PinRequired),
            "puk" | "puk_required" => Ok(SimState::PukRequired),
            "network" | "network_locked" => Ok(SimState::NetworkLocked),
            "ready" => Ok(SimState::Ready),
            other => other
                .parse::<i32>()
                .map(SimState::from_raw)
                .map_err(|_| anyhow!("无法识别的 SIM 状态: {}", s)),
        }
    }
}

/// Whether the SIM unlock panel is showing for the given state
///
/// True exactly when the card is waiting on a PIN, a PUK or a network
/// unlock code. Absent or unknown cards do not count: there is nothing
/// on screen to unlock.
pub fn is_sim_panel_showing(state: SimState) -> bool {
    state.requires_unlock()
}
