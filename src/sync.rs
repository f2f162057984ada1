//! [`ColorSync`] owns the canonical color and keeps the RGB, XYZ and CMYK
//! representations derived from it.
//!
//! Every accepted proposal replaces the canonical color as a whole and then
//! pushes all three representations to the [`DisplaySurface`], including the
//! one the proposal came from. Proposals made while that refresh is running
//! are echoes of the update itself and are ignored.
//!
//! ```rust
//! use colorsync::{ColorSync, Outcome, Proposal};
//! let sync = ColorSync::new(());
//! sync.start();
//!
//! let Ok(Outcome::Accepted(update)) = sync.propose(Proposal::Rgb([210, 105, 30])) else {
//!     panic!("rgb(210, 105, 30) is a valid color");
//! };
//! assert_eq!(update.displays.cmyk.to_string(), "cmyk(0.0%, 50.0%, 85.7%, 17.6%)");
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::{debug, trace};

use crate::{
    color::{Clip, Space},
    convert,
    error::ProposalError,
    models::{Cmyk, Rgb8, Srgb, Xyz},
    proposal::Proposal,
};

/// The states of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Created but the displays have not been populated yet.
    Initializing,
    /// Waiting for a proposal.
    Idle,
    /// Pushing an accepted change out to the displays.
    Updating,
}

/// Every representation of one canonical color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displays {
    /// The canonical color itself.
    pub color: Srgb,
    /// The 8-bit RGB view.
    pub rgb: Rgb8,
    /// The CIE-XYZ view.
    pub xyz: Xyz,
    /// The CMYK view.
    pub cmyk: Cmyk,
}

impl Displays {
    /// Derive all representations of `color`.
    pub fn derive(color: Srgb) -> Self {
        Self {
            color,
            rgb: color.to_rgb8(),
            xyz: convert::rgb_to_xyz(&color),
            cmyk: convert::rgb_to_cmyk(&color),
        }
    }
}

/// An accepted XYZ value was outside the sRGB gamut and had to be clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfGamutWarning {
    /// The sRGB channels that were clamped.
    pub clip: Clip,
}

impl fmt::Display for OutOfGamutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = Srgb::CHANNELS
            .iter()
            .zip([Clip::RED, Clip::GREEN, Clip::BLUE])
            .filter(|(_, flag)| self.clip.contains(*flag))
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();

        write!(
            f,
            "XYZ value is outside the RGB gamut, clipped {}",
            channels.join(", ")
        )
    }
}

/// The result of an accepted change, as pushed to the displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Update {
    /// The representation that drove the change. `None` when the color was
    /// set directly.
    pub source: Option<Space>,
    /// The new canonical color and its representations.
    pub displays: Displays,
    /// Set when the change needed clipping.
    pub warning: Option<OutOfGamutWarning>,
}

/// Why a proposal was ignored without being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The displays are still being populated for the first time.
    Initializing,
    /// The proposal was made while an update was being pushed to the
    /// displays, so it is an echo of that update.
    Echo,
}

/// What happened to a proposal that was not rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The proposal became the canonical color.
    Accepted(Update),
    /// The proposal was not evaluated.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Return the update if the proposal was accepted.
    pub fn accepted(self) -> Option<Update> {
        match self {
            Outcome::Accepted(update) => Some(update),
            Outcome::Ignored(_) => None,
        }
    }
}

/// The presentation layer that shows the representations.
pub trait DisplaySurface {
    /// Show every representation of a new canonical color.
    ///
    /// Calls back into the [`ColorSync`] that is refreshing this surface are
    /// ignored until this returns.
    fn refresh(&mut self, update: &Update);
}

impl DisplaySurface for () {
    fn refresh(&mut self, _update: &Update) {}
}

/// Owns the canonical color and mediates proposals from the three
/// representations.
pub struct ColorSync {
    state: Cell<State>,
    color: Cell<Srgb>,
    surface: RefCell<Box<dyn DisplaySurface>>,
}

impl ColorSync {
    /// Create a controller showing white on `surface`. Nothing is shown and
    /// every proposal is ignored until [`ColorSync::start`] is called.
    pub fn new(surface: impl DisplaySurface + 'static) -> Self {
        Self {
            state: Cell::new(State::Initializing),
            color: Cell::new(Srgb::WHITE),
            surface: RefCell::new(Box::new(surface)),
        }
    }

    /// Populate the displays for the first time and start accepting
    /// proposals.
    pub fn start(&self) -> Displays {
        let displays = self.current_displays();
        if self.state.get() != State::Initializing {
            return displays;
        }

        self.surface.borrow_mut().refresh(&Update {
            source: None,
            displays,
            warning: None,
        });
        self.transition(State::Idle);

        displays
    }

    /// The current state of the controller.
    pub fn state(&self) -> State {
        self.state.get()
    }

    /// The canonical color.
    pub fn color(&self) -> Srgb {
        self.color.get()
    }

    /// Every representation of the canonical color.
    pub fn current_displays(&self) -> Displays {
        Displays::derive(self.color.get())
    }

    /// Propose a new value from one of the representations.
    ///
    /// The proposal is range checked and converted to a canonical color,
    /// which then replaces the current one and is pushed to the displays.
    /// A rejected proposal leaves the canonical color and the displays
    /// untouched.
    pub fn propose(&self, proposal: impl Into<Proposal>) -> Result<Outcome, ProposalError> {
        let proposal = proposal.into();
        let space = proposal.space();

        if let Some(reason) = self.ignore_reason() {
            debug!(%space, ?reason, "ignored proposal");
            return Ok(Outcome::Ignored(reason));
        }

        let (color, clip) = proposal.resolve().inspect_err(|err| {
            debug!(%space, %err, "rejected proposal");
        })?;

        let warning = clip.is_clipped().then(|| {
            debug!(%space, ?clip, "proposal clipped into the RGB gamut");
            OutOfGamutWarning { clip }
        });

        Ok(Outcome::Accepted(self.publish(Some(space), color, warning)))
    }

    /// Propose a new value from raw text, one field per channel. See
    /// [`Proposal::parse`] for the accepted formats.
    pub fn propose_text(&self, space: Space, fields: &[&str]) -> Result<Outcome, ProposalError> {
        if let Some(reason) = self.ignore_reason() {
            debug!(%space, ?reason, "ignored proposal");
            return Ok(Outcome::Ignored(reason));
        }

        let proposal = Proposal::parse(space, fields).inspect_err(|err| {
            debug!(%space, %err, "rejected proposal");
        })?;
        self.propose(proposal)
    }

    /// Set the canonical color directly, as an external color picker would.
    /// There is no range check, the color is clamped into gamut instead and
    /// NaN channels become zero.
    pub fn set_color(&self, color: impl Into<Srgb>) -> Outcome {
        if let Some(reason) = self.ignore_reason() {
            debug!(?reason, "ignored color");
            return Outcome::Ignored(reason);
        }

        let color = color.into().clamped();
        Outcome::Accepted(self.publish(None, color, None))
    }

    fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self.state.get() {
            State::Initializing => Some(IgnoreReason::Initializing),
            State::Updating => Some(IgnoreReason::Echo),
            State::Idle => None,
        }
    }

    fn transition(&self, to: State) {
        let from = self.state.replace(to);
        trace!(?from, ?to, "state transition");
    }

    /// Replace the canonical color and push every representation of it.
    fn publish(&self, source: Option<Space>, color: Srgb, warning: Option<OutOfGamutWarning>) -> Update {
        let update = Update {
            source,
            displays: Displays::derive(color),
            warning,
        };

        self.color.set(color);
        self.transition(State::Updating);
        {
            let _idle = IdleOnDrop(self);
            self.surface.borrow_mut().refresh(&update);
        }

        debug!(?source, rgb = %update.displays.rgb, "accepted color");
        update
    }
}

/// Moves the controller back to [`State::Idle`] when dropped, also when the
/// surface panics during a refresh.
struct IdleOnDrop<'a>(&'a ColorSync);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.transition(State::Idle);
    }
}

impl fmt::Debug for ColorSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSync")
            .field("state", &self.state.get())
            .field("color", &self.color.get())
            .finish_non_exhaustive()
    }
}
