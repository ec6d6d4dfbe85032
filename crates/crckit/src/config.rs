//! Runtime configuration (backend overrides).
//!
//! Every engine carries a precomputed table, but the kernel that consumes it
//! can be overridden process-wide to the bitwise reference for auditing or
//! differential testing:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCKIT_FORCE` | `auto`, `table` (`portable`, `lookup`), `reference` (`bitwise`) |
//!
//! The environment is read once and cached. Without the `std` feature the
//! default (`auto`) is always used.

/// Forced backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Use the default selector (table-driven).
  #[default]
  Auto,
  /// Force the bitwise reference kernel (slow, obviously correct).
  Reference,
  /// Force the table-driven kernel.
  Table,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
    }
  }

  /// Parse a force mode, ASCII case-insensitive. Blank or unknown values give `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("lookup")
    {
      return Some(Self::Table);
    }

    None
  }

  /// The concrete backend this mode selects.
  #[inline]
  #[must_use]
  pub const fn resolve(self) -> Backend {
    match self {
      Self::Auto | Self::Table => Backend::Table,
      Self::Reference => Backend::Reference,
    }
  }
}

/// Kernel an engine computes with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
  /// Byte-at-a-time lookups into the precomputed table.
  Table,
  /// Bit-at-a-time polynomial division.
  Reference,
}

impl Backend {
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Table => "portable/table",
      Self::Reference => "reference/bitwise",
    }
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Force,
  /// Backend the requested mode resolves to.
  pub effective_backend: Backend,
}

impl Config {
  #[must_use]
  pub const fn from_force(requested_force: Force) -> Self {
    Self {
      requested_force,
      effective_backend: requested_force.resolve(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::from_force(Force::Auto)
  }
}

#[cfg(feature = "std")]
fn read_env_force() -> Force {
  const VAR: &str = "CRCKIT_FORCE";

  let Ok(raw) = std::env::var(VAR) else {
    return Force::Auto;
  };
  match Force::parse(&raw) {
    Some(force) => {
      tracing::debug!(var = VAR, force = force.as_str(), "applying backend override");
      force
    }
    None => {
      tracing::debug!(var = VAR, value = raw.as_str(), "ignoring unrecognized backend override");
      Force::Auto
    }
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Config> = OnceLock::new();
    *CACHED.get_or_init(|| Config::from_force(read_env_force()))
  }

  #[cfg(not(feature = "std"))]
  {
    Config::default()
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  #[test_case("auto", Force::Auto)]
  #[test_case("AUTO", Force::Auto)]
  #[test_case("reference", Force::Reference)]
  #[test_case("Bitwise", Force::Reference)]
  #[test_case("table", Force::Table)]
  #[test_case(" portable ", Force::Table)]
  #[test_case("lookup", Force::Table)]
  fn parses_known_values(raw: &str, expected: Force) {
    assert_eq!(Force::parse(raw), Some(expected));
  }

  #[test_case("" ; "empty")]
  #[test_case("   " ; "blank")]
  #[test_case("simd" ; "unknown")]
  fn rejects_unknown_values(raw: &str) {
    assert_eq!(Force::parse(raw), None);
  }

  #[test]
  fn auto_resolves_to_table() {
    assert_eq!(Force::Auto.resolve(), Backend::Table);
    assert_eq!(Force::Table.resolve(), Backend::Table);
    assert_eq!(Force::Reference.resolve(), Backend::Reference);
  }

  #[test]
  fn as_str_round_trips_through_parse() {
    for force in [Force::Auto, Force::Reference, Force::Table] {
      assert_eq!(Force::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn default_config() {
    let config = Config::default();
    assert_eq!(config.requested_force, Force::Auto);
    assert_eq!(config.effective_backend, Backend::Table);
  }

  #[test]
  fn get_is_cached() {
    assert_eq!(get(), get());
  }
}
