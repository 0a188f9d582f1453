//! Match state and its phase/turn state machine.
//!
//! [`MatchState`] is an owned value. Every input, local or remote, is an
//! [`Event`] fed to [`MatchState::apply`], which consumes the state and
//! returns the next one together with the [`Effect`]s the driver has to
//! carry out (send a message, schedule the AI). Events that are illegal in
//! the current phase or turn leave the state unchanged and produce no
//! effects, so input from an untrusted peer can never corrupt a match.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use log::{debug, info, warn};

use crate::core::aircraft::Aircraft;
use crate::core::attack::{resolve_attack, AttackOutcome};
use crate::core::common::{CellStatus, PlayerId, Point};
use crate::core::config::FLEET_SIZE;
use crate::core::fleet::{FleetSlot, ObservedFleet, OwnFleet};
use crate::core::radar::Radar;

/// How the two seats are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Both seats share one device and take turns.
    LocalPvp,
    /// Seat one is human, seat two the computer.
    VsAi,
    /// Each seat runs its own engine; they talk over a peer channel.
    Online,
}

/// Coarse stage of the match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Lobby,
    Connecting,
    PlacementP1,
    PlacementP2,
    WaitingForOpponent,
    Transition,
    Battle,
    GameOver,
    /// The peer channel closed before the match ended.
    Disconnected,
}

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start a pass-and-play match.
    StartLocal,
    /// Start a match against the computer with its already generated fleet.
    StartVsAi(OwnFleet),
    /// Begin setting up a peer channel.
    BeginConnecting,
    /// The peer channel is open; `seat` is the local player's number.
    ConnectionOpened { seat: PlayerId },
    /// Channel setup failed.
    ConnectionFailed,
    /// The player placing now confirmed a full fleet.
    FleetPlaced(OwnFleet),
    /// The next player took over the device after a transition screen.
    AcknowledgeTransition,
    /// A local player fires at the opponent.
    Attack { by: PlayerId, target: Point },
    /// The peer announced its fleet.
    RemoteReady(ObservedFleet),
    /// The peer fired at our fleet.
    RemoteAttack(Point),
    /// The peer answered our attack.
    RemoteResult { target: Point, status: CellStatus },
    /// The peer channel is gone.
    ChannelClosed,
}

/// Something the user should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ConnectionError,
    OpponentDisconnected,
}

/// Work for the driver produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Announce our fleet to the peer.
    SendReady(Vec<Aircraft>),
    /// Fire at the peer's fleet.
    SendAttack(Point),
    /// Answer the peer's attack.
    SendResult { target: Point, outcome: AttackOutcome },
    /// The computer moves next, after the cosmetic delay.
    AiTurnDue,
    Notify(Notice),
}

/// A state together with the effects that produced it.
#[derive(Debug)]
pub struct Step {
    pub state: MatchState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn unchanged(state: MatchState) -> Self {
        Step {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: MatchState, effect: Effect) -> Self {
        Step {
            state,
            effects: vec![effect],
        }
    }
}

/// The authoritative aggregate of one match, as seen by one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    mode: Option<GameMode>,
    phase: GamePhase,
    seat: PlayerId,
    current_player: PlayerId,
    p1_fleet: FleetSlot,
    p2_fleet: FleetSlot,
    p1_radar: Radar,
    p2_radar: Radar,
    winner: Option<PlayerId>,
    pending_attack: Option<Point>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// A fresh match sitting in the lobby. Resetting a match means
    /// discarding it and starting from here.
    pub fn new() -> Self {
        Self {
            mode: None,
            phase: GamePhase::Lobby,
            seat: PlayerId::One,
            current_player: PlayerId::One,
            p1_fleet: FleetSlot::Empty,
            p2_fleet: FleetSlot::Empty,
            p1_radar: Radar::new(),
            p2_radar: Radar::new(),
            winner: None,
            pending_attack: None,
        }
    }

    /// An online match whose peer channel just opened.
    pub fn online(seat: PlayerId) -> Self {
        Self::new()
            .apply(Event::BeginConnecting)
            .state
            .apply(Event::ConnectionOpened { seat })
            .state
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The local seat. Meaningful in online mode; local modes report `One`.
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Online attack sent and not answered yet.
    pub fn pending_attack(&self) -> Option<Point> {
        self.pending_attack
    }

    pub fn fleet(&self, player: PlayerId) -> &FleetSlot {
        match player {
            PlayerId::One => &self.p1_fleet,
            PlayerId::Two => &self.p2_fleet,
        }
    }

    /// What `player` knows about the opponent's board.
    pub fn radar(&self, player: PlayerId) -> &Radar {
        match player {
            PlayerId::One => &self.p1_radar,
            PlayerId::Two => &self.p2_radar,
        }
    }

    /// `GameOver` and `Disconnected` accept no further events.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Disconnected)
    }

    /// Who should take the device next. Differs from `current_player` only
    /// on the transition screen that precedes the second placement.
    pub fn next_to_act(&self) -> PlayerId {
        if self.phase == GamePhase::Transition && self.p2_fleet.is_empty() {
            PlayerId::Two
        } else {
            self.current_player
        }
    }

    /// Online: whether the local seat may fire right now.
    pub fn is_my_turn(&self) -> bool {
        self.phase == GamePhase::Battle
            && self.current_player == self.seat
            && self.pending_attack.is_none()
    }

    fn fleet_mut(&mut self, player: PlayerId) -> &mut FleetSlot {
        match player {
            PlayerId::One => &mut self.p1_fleet,
            PlayerId::Two => &mut self.p2_fleet,
        }
    }

    fn radar_mut(&mut self, player: PlayerId) -> &mut Radar {
        match player {
            PlayerId::One => &mut self.p1_radar,
            PlayerId::Two => &mut self.p2_radar,
        }
    }

    /// Feed one event through the state machine.
    pub fn apply(self, event: Event) -> Step {
        if self.is_terminal() {
            debug!("ignoring {:?} in terminal phase {:?}", event, self.phase);
            return Step::unchanged(self);
        }
        match event {
            Event::StartLocal => self.start(GameMode::LocalPvp, None),
            Event::StartVsAi(fleet) => self.start(GameMode::VsAi, Some(fleet)),
            Event::BeginConnecting => self.begin_connecting(),
            Event::ConnectionOpened { seat } => self.connection_opened(seat),
            Event::ConnectionFailed => self.connection_failed(),
            Event::FleetPlaced(fleet) => self.fleet_placed(fleet),
            Event::AcknowledgeTransition => self.acknowledge_transition(),
            Event::Attack { by, target } => self.attack(by, target),
            Event::RemoteReady(fleet) => self.remote_ready(fleet),
            Event::RemoteAttack(target) => self.remote_attack(target),
            Event::RemoteResult { target, status } => self.remote_result(target, status),
            Event::ChannelClosed => self.channel_closed(),
        }
    }

    fn start(mut self, mode: GameMode, ai_fleet: Option<OwnFleet>) -> Step {
        if self.phase != GamePhase::Lobby {
            debug!("cannot start a {:?} match from {:?}", mode, self.phase);
            return Step::unchanged(self);
        }
        self.mode = Some(mode);
        self.phase = GamePhase::PlacementP1;
        if let Some(fleet) = ai_fleet {
            self.p2_fleet = FleetSlot::Own(fleet);
        }
        info!("{:?} match started", mode);
        Step::unchanged(self)
    }

    fn begin_connecting(mut self) -> Step {
        if self.phase != GamePhase::Lobby {
            return Step::unchanged(self);
        }
        self.mode = Some(GameMode::Online);
        self.phase = GamePhase::Connecting;
        Step::unchanged(self)
    }

    fn connection_opened(mut self, seat: PlayerId) -> Step {
        if self.phase != GamePhase::Connecting {
            return Step::unchanged(self);
        }
        self.seat = seat;
        self.phase = GamePhase::PlacementP1;
        info!("peer channel open, playing as {}", seat);
        Step::unchanged(self)
    }

    fn connection_failed(self) -> Step {
        if self.phase != GamePhase::Connecting {
            return Step::unchanged(self);
        }
        warn!("peer channel setup failed, back to lobby");
        Step::with(MatchState::new(), Effect::Notify(Notice::ConnectionError))
    }

    fn fleet_placed(mut self, fleet: OwnFleet) -> Step {
        match (self.mode, self.phase) {
            (Some(GameMode::Online), GamePhase::PlacementP1) => {
                let seat = self.seat;
                let snapshot = fleet.snapshot();
                *self.fleet_mut(seat) = FleetSlot::Own(fleet);
                self.phase = if self.fleet(seat.other()).is_empty() {
                    GamePhase::WaitingForOpponent
                } else {
                    GamePhase::Battle
                };
                debug!("fleet placed, now {:?}", self.phase);
                Step::with(self, Effect::SendReady(snapshot))
            }
            (Some(GameMode::VsAi), GamePhase::PlacementP1) => {
                self.p1_fleet = FleetSlot::Own(fleet);
                self.current_player = PlayerId::One;
                self.phase = GamePhase::Battle;
                Step::unchanged(self)
            }
            (Some(GameMode::LocalPvp), GamePhase::PlacementP1) => {
                self.p1_fleet = FleetSlot::Own(fleet);
                self.phase = GamePhase::Transition;
                Step::unchanged(self)
            }
            (Some(GameMode::LocalPvp), GamePhase::PlacementP2) => {
                self.p2_fleet = FleetSlot::Own(fleet);
                self.current_player = PlayerId::One;
                self.phase = GamePhase::Battle;
                Step::unchanged(self)
            }
            (mode, phase) => {
                debug!("fleet placement ignored in {:?}/{:?}", mode, phase);
                Step::unchanged(self)
            }
        }
    }

    fn acknowledge_transition(mut self) -> Step {
        if self.phase != GamePhase::Transition {
            return Step::unchanged(self);
        }
        self.phase = if self.p2_fleet.is_empty() {
            GamePhase::PlacementP2
        } else {
            GamePhase::Battle
        };
        Step::unchanged(self)
    }

    fn attack(mut self, by: PlayerId, target: Point) -> Step {
        if self.phase != GamePhase::Battle || by != self.current_player || !target.in_bounds() {
            debug!("attack by {} at {} rejected", by, target);
            return Step::unchanged(self);
        }
        if self.radar(by).contains(target) {
            debug!("{} already attacked {}", by, target);
            return Step::unchanged(self);
        }

        if self.mode == Some(GameMode::Online) {
            if by != self.seat || self.pending_attack.is_some() {
                return Step::unchanged(self);
            }
            self.pending_attack = Some(target);
            return Step::with(self, Effect::SendAttack(target));
        }

        let defender = by.other();
        let fleet = match self.fleet(defender).as_own() {
            Some(f) => f,
            None => {
                warn!("no authoritative fleet for {}, attack dropped", defender);
                return Step::unchanged(self);
            }
        };
        let (outcome, fleet) = resolve_attack(fleet, target);
        let eliminated = fleet.is_eliminated();
        *self.fleet_mut(defender) = FleetSlot::Own(fleet);
        if let Err(e) = self.radar_mut(by).record(target, outcome.status) {
            warn!("radar update failed: {}", e);
        }
        debug!("{} fired at {}: {:?}", by, target, outcome.status);

        if eliminated {
            self.winner = Some(by);
            self.phase = GamePhase::GameOver;
            info!("{} wins", by);
            return Step::unchanged(self);
        }

        match (self.mode, by) {
            (Some(GameMode::VsAi), PlayerId::One) => {
                self.current_player = PlayerId::Two;
                Step::with(self, Effect::AiTurnDue)
            }
            (Some(GameMode::VsAi), PlayerId::Two) => {
                self.current_player = PlayerId::One;
                Step::unchanged(self)
            }
            _ => {
                self.current_player = defender;
                self.phase = GamePhase::Transition;
                Step::unchanged(self)
            }
        }
    }

    fn remote_ready(mut self, fleet: ObservedFleet) -> Step {
        if self.mode != Some(GameMode::Online) {
            return Step::unchanged(self);
        }
        let opponent = self.seat.other();
        if !self.fleet(opponent).is_empty() {
            debug!("duplicate READY ignored");
            return Step::unchanged(self);
        }
        match self.phase {
            GamePhase::PlacementP1 => {
                *self.fleet_mut(opponent) = FleetSlot::Observed(fleet);
            }
            GamePhase::WaitingForOpponent => {
                *self.fleet_mut(opponent) = FleetSlot::Observed(fleet);
                if !self.fleet(self.seat).is_empty() {
                    self.phase = GamePhase::Battle;
                    info!("both fleets ready, battle begins");
                }
            }
            phase => debug!("READY ignored in {:?}", phase),
        }
        Step::unchanged(self)
    }

    fn remote_attack(mut self, target: Point) -> Step {
        let seat = self.seat;
        let opponent = seat.other();
        if self.mode != Some(GameMode::Online)
            || self.phase != GamePhase::Battle
            || self.current_player != opponent
            || !target.in_bounds()
            || self.radar(opponent).contains(target)
        {
            warn!("unexpected ATTACK at {} ignored", target);
            return Step::unchanged(self);
        }
        let fleet = match self.fleet(seat).as_own() {
            Some(f) => f,
            None => return Step::unchanged(self),
        };
        let (outcome, fleet) = resolve_attack(fleet, target);
        let eliminated = fleet.is_eliminated();
        *self.fleet_mut(seat) = FleetSlot::Own(fleet);
        if let Err(e) = self.radar_mut(opponent).record(target, outcome.status) {
            warn!("radar update failed: {}", e);
        }
        self.current_player = seat;
        debug!("opponent fired at {}: {:?}", target, outcome.status);

        if eliminated {
            self.winner = Some(opponent);
            self.phase = GamePhase::GameOver;
            info!("fleet eliminated, {} wins", opponent);
        }
        Step::with(self, Effect::SendResult { target, outcome })
    }

    fn remote_result(mut self, target: Point, status: CellStatus) -> Step {
        let seat = self.seat;
        if self.mode != Some(GameMode::Online)
            || self.phase != GamePhase::Battle
            || self.current_player != seat
            || self.pending_attack != Some(target)
        {
            warn!("unexpected RESULT for {} ignored", target);
            return Step::unchanged(self);
        }
        if let Err(e) = self.radar_mut(seat).record(target, status) {
            warn!("radar update failed: {}", e);
        }
        self.pending_attack = None;
        self.current_player = seat.other();
        debug!("our shot at {}: {:?}", target, status);

        if self.radar(seat).dead_count() >= FLEET_SIZE {
            self.winner = Some(seat);
            self.phase = GamePhase::GameOver;
            info!("every enemy aircraft destroyed, {} wins", seat);
        }
        Step::unchanged(self)
    }

    fn channel_closed(mut self) -> Step {
        match self.phase {
            GamePhase::Lobby => Step::unchanged(self),
            GamePhase::Connecting => {
                Step::with(MatchState::new(), Effect::Notify(Notice::ConnectionError))
            }
            _ if self.mode == Some(GameMode::Online) => {
                warn!("peer channel closed in {:?}", self.phase);
                self.phase = GamePhase::Disconnected;
                self.pending_attack = None;
                Step::with(self, Effect::Notify(Notice::OpponentDisconnected))
            }
            _ => Step::unchanged(self),
        }
    }
}
