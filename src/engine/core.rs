use std::time::Duration;

use crate::config::DEPLOY;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::deployment::DeploymentResult;
use crate::models::token_config::TokenConfig;
use crate::utils::app_time::{AppInstant, millis};

use super::address::{AddressSource, RandomAddressSource};
use super::messages::DeployTrigger;
use super::state::DeployPhase;
use super::timer::DeployTimer;

/// The simulated deployment state machine.
///
/// Owned by the application root. All transitions are synchronous and take
/// the current instant from the caller, so the UI loop (or a test) decides
/// what "now" is.
pub struct DeploySimulator<S: AddressSource = RandomAddressSource> {
    phase: DeployPhase,
    delay: Duration,
    source: S,
}

impl Default for DeploySimulator<RandomAddressSource> {
    fn default() -> Self {
        Self::new(RandomAddressSource::default(), millis(DEPLOY.delay_ms))
    }
}

impl<S: AddressSource> DeploySimulator<S> {
    pub fn new(source: S, delay: Duration) -> Self {
        Self {
            phase: DeployPhase::Idle,
            delay,
            source,
        }
    }

    /// Idle -> Deploying, if the config is deployable.
    ///
    /// Every other case leaves the simulator untouched.
    pub fn trigger(&mut self, config: &TokenConfig, now: AppInstant) -> DeployTrigger {
        let outcome = match self.phase {
            DeployPhase::Deploying { .. } => DeployTrigger::AlreadyDeploying,
            DeployPhase::Completed(_) => DeployTrigger::AwaitingDismiss,
            DeployPhase::Idle if !config.is_deployable() => DeployTrigger::NotEligible,
            DeployPhase::Idle => {
                self.phase = DeployPhase::Deploying {
                    token_name: config.name.clone(),
                    timer: DeployTimer::start(now, self.delay),
                };
                log::info!(
                    "Deploying {} ({}) with a {}ms simulated delay",
                    config.name,
                    config.symbol,
                    self.delay.as_millis()
                );
                DeployTrigger::Started
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_deploy_events && !outcome.is_started() {
            log::debug!("Deploy trigger ignored: {}", outcome);
        }

        outcome
    }

    /// Deploying -> Completed once the delay has passed.
    ///
    /// Returns the new result only on the poll that completes it.
    pub fn poll(&mut self, now: AppInstant) -> Option<&DeploymentResult> {
        let due = matches!(&self.phase, DeployPhase::Deploying { timer, .. } if timer.is_due(now));
        if !due {
            return None;
        }

        let DeployPhase::Deploying { token_name, timer } = std::mem::take(&mut self.phase) else {
            return None;
        };

        let result = DeploymentResult {
            address: self.source.next_address(),
            token_name,
            elapsed: timer.elapsed(now),
        };
        log::info!(
            "✅ {} deployed at {} in {:.1}s",
            result.token_name,
            result.address,
            result.elapsed.as_secs_f32()
        );

        self.phase = DeployPhase::Completed(result);
        self.result()
    }

    /// Time left before the pending deployment completes.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        match &self.phase {
            DeployPhase::Deploying { timer, .. } => Some(timer.remaining(now)),
            _ => None,
        }
    }

    /// Completed -> Idle. Returns whether there was anything to dismiss.
    pub fn dismiss(&mut self) -> bool {
        if !matches!(self.phase, DeployPhase::Completed(_)) {
            return false;
        }
        self.phase = DeployPhase::Idle;
        log::info!("Deployment confirmation dismissed");
        true
    }

    pub fn phase(&self) -> &DeployPhase {
        &self.phase
    }

    pub fn is_deploying(&self) -> bool {
        self.phase.is_deploying()
    }

    pub fn result(&self) -> Option<&DeploymentResult> {
        match &self.phase {
            DeployPhase::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::deployment::ContractAddress;
    use crate::models::token_config::{ConfigUpdate, Decimals};
    use crate::utils::app_time::now;

    const FIXED: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

    /// Hands out the same address and counts calls
    struct FixedAddressSource {
        calls: usize,
    }

    impl AddressSource for FixedAddressSource {
        fn next_address(&mut self) -> ContractAddress {
            self.calls += 1;
            ContractAddress::parse(FIXED).unwrap()
        }
    }

    fn fixed_simulator() -> DeploySimulator<FixedAddressSource> {
        DeploySimulator::new(FixedAddressSource { calls: 0 }, millis(3_000))
    }

    fn test_coin() -> TokenConfig {
        let mut config = TokenConfig::default();
        config.apply(ConfigUpdate::Name("Test Coin".into()));
        config.apply(ConfigUpdate::Symbol("test".into()));
        config.apply(ConfigUpdate::Supply("abc123000".into()));
        config.apply(ConfigUpdate::Decimals(Decimals::Eighteen));
        config
    }

    fn is_well_formed(address: &str) -> bool {
        address.len() == 42
            && address.starts_with("0x")
            && address[2..].chars().all(|c| "0123456789abcdef".contains(c))
    }

    #[test]
    fn default_simulator_waits_three_seconds() {
        let sim = DeploySimulator::<RandomAddressSource>::default();
        assert_eq!(sim.delay(), Duration::from_millis(3_000));
        assert!(sim.phase().is_idle());
    }

    #[test]
    fn ineligible_config_does_not_start() {
        let mut sim = fixed_simulator();
        let mut config = test_coin();
        config.set_symbol("");

        assert_eq!(sim.trigger(&config, now()), DeployTrigger::NotEligible);
        assert!(sim.phase().is_idle());
    }

    #[test]
    fn completes_only_after_the_delay() {
        let mut sim = fixed_simulator();
        let t0 = now();

        assert_eq!(sim.trigger(&test_coin(), t0), DeployTrigger::Started);
        assert!(sim.is_deploying());
        assert_eq!(sim.remaining(t0), Some(Duration::from_millis(3_000)));

        assert!(sim.poll(t0 + Duration::from_millis(2_999)).is_none());
        assert!(sim.is_deploying());
        assert_eq!(sim.source.calls, 0);

        let result = sim.poll(t0 + Duration::from_millis(3_000)).cloned();
        let result = result.expect("deployment should complete at the deadline");
        assert_eq!(result.address.as_str(), FIXED);
        assert_eq!(result.elapsed, Duration::from_millis(3_000));
        assert_eq!(sim.remaining(t0), None);

        // Completion is reported once
        assert!(sim.poll(t0 + Duration::from_secs(10)).is_none());
        assert_eq!(sim.source.calls, 1);
    }

    #[test]
    fn retrigger_while_deploying_is_a_no_op() {
        let mut sim = fixed_simulator();
        let config = test_coin();
        let t0 = now();

        sim.trigger(&config, t0);
        let before = sim.remaining(t0 + Duration::from_millis(1_000));

        assert_eq!(
            sim.trigger(&config, t0 + Duration::from_millis(1_000)),
            DeployTrigger::AlreadyDeploying
        );
        // The deadline did not move
        assert_eq!(sim.remaining(t0 + Duration::from_millis(1_000)), before);
        assert!(sim.poll(t0 + Duration::from_millis(3_000)).is_some());
        assert_eq!(sim.source.calls, 1);
    }

    #[test]
    fn result_keeps_the_name_from_trigger_time() {
        let mut sim = fixed_simulator();
        let mut config = test_coin();
        let t0 = now();

        sim.trigger(&config, t0);
        config.apply(ConfigUpdate::Name("Renamed Coin".into()));
        sim.poll(t0 + Duration::from_millis(3_000));

        assert_eq!(sim.result().map(|r| r.token_name.as_str()), Some("Test Coin"));
    }

    #[test]
    fn trigger_is_ignored_until_dismissed() {
        let mut sim = fixed_simulator();
        let config = test_coin();
        let t0 = now();

        sim.trigger(&config, t0);
        sim.poll(t0 + Duration::from_millis(3_000));

        assert_eq!(
            sim.trigger(&config, t0 + Duration::from_millis(3_100)),
            DeployTrigger::AwaitingDismiss
        );
        assert!(sim.result().is_some());
    }

    #[test]
    fn dismiss_only_leaves_completed() {
        let mut sim = fixed_simulator();
        assert!(!sim.dismiss());

        let t0 = now();
        sim.trigger(&test_coin(), t0);
        assert!(!sim.dismiss());
        assert!(sim.is_deploying());
    }

    #[test]
    fn full_deploy_scenario() {
        let mut sim = DeploySimulator::new(RandomAddressSource::seeded(1), millis(DEPLOY.delay_ms));
        let config = test_coin();
        assert_eq!(config.symbol, "TEST");
        assert_eq!(config.supply, "123000");
        assert!(config.is_deployable());

        let snapshot = config.clone();
        let t0 = now();
        assert!(sim.trigger(&config, t0).is_started());

        let result = sim
            .poll(t0 + Duration::from_millis(3_000))
            .cloned()
            .expect("deployment should complete");
        assert_eq!(result.token_name, "Test Coin");
        assert!(is_well_formed(result.address.as_str()), "{}", result.address);

        assert!(sim.dismiss());
        assert!(sim.phase().is_idle());
        assert!(sim.result().is_none());
        assert_eq!(config, snapshot);

        // Same config can be deployed again
        let t1 = t0 + Duration::from_secs(5);
        assert!(sim.trigger(&config, t1).is_started());
    }
}
