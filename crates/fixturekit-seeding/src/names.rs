//! Names of the services the extension registers.

use std::fmt;

use fixturekit_di::ServiceId;
use serde::{Serialize, Serializer};

/// One registration produced by the fixtures extension.
///
/// Displays as the service name relative to the extension prefix, for
/// example `faker.provider.0` or `alice.loader.neon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixtureService {
	/// `data_fixtures.purger`
	Purger,
	/// `data_fixtures.executor`
	Executor,
	/// `data_fixtures.loader`
	FixtureLoader,
	/// `command.load_fixtures`
	LoadFixturesCommand,
	/// `faker.generator`
	FakerGenerator,
	/// `faker.provider.<index>`
	FakerProvider(usize),
	/// `alice.orm`
	OrmAdapter,
	/// `alice.loader.<name>`
	AliceLoader(String),
}

impl FixtureService {
	/// Full service name under an extension prefix.
	///
	/// # Examples
	///
	/// ```
	/// use fixturekit_seeding::FixtureService;
	///
	/// let id = FixtureService::AliceLoader("neon".into()).service_id("fixtures");
	/// assert_eq!(id.as_str(), "fixtures.alice.loader.neon");
	/// ```
	pub fn service_id(&self, prefix: &str) -> ServiceId {
		ServiceId::new(format!("{}.{}", prefix, self))
	}
}

impl fmt::Display for FixtureService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FixtureService::Purger => f.write_str("data_fixtures.purger"),
			FixtureService::Executor => f.write_str("data_fixtures.executor"),
			FixtureService::FixtureLoader => f.write_str("data_fixtures.loader"),
			FixtureService::LoadFixturesCommand => f.write_str("command.load_fixtures"),
			FixtureService::FakerGenerator => f.write_str("faker.generator"),
			FixtureService::FakerProvider(index) => write!(f, "faker.provider.{}", index),
			FixtureService::OrmAdapter => f.write_str("alice.orm"),
			FixtureService::AliceLoader(name) => write!(f, "alice.loader.{}", name),
		}
	}
}

impl Serialize for FixtureService {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FixtureService::Purger, "fixtures.data_fixtures.purger")]
	#[case(FixtureService::Executor, "fixtures.data_fixtures.executor")]
	#[case(FixtureService::FixtureLoader, "fixtures.data_fixtures.loader")]
	#[case(FixtureService::LoadFixturesCommand, "fixtures.command.load_fixtures")]
	#[case(FixtureService::FakerGenerator, "fixtures.faker.generator")]
	#[case(FixtureService::FakerProvider(3), "fixtures.faker.provider.3")]
	#[case(FixtureService::OrmAdapter, "fixtures.alice.orm")]
	#[case(FixtureService::AliceLoader("yaml".to_string()), "fixtures.alice.loader.yaml")]
	fn test_service_id(#[case] service: FixtureService, #[case] expected: &str) {
		assert_eq!(service.service_id("fixtures").as_str(), expected);
	}

	#[rstest]
	fn test_custom_prefix() {
		assert_eq!(
			FixtureService::OrmAdapter.service_id("seed").as_str(),
			"seed.alice.orm"
		);
	}

	#[rstest]
	fn test_serializes_as_relative_name() {
		let json = serde_json::to_value(FixtureService::FakerProvider(1)).unwrap();
		assert_eq!(json, serde_json::json!("faker.provider.1"));
	}
}
