// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render millisecond durations as "D days, H hours, M minutes, S seconds"
// role: formatting/durations
// inputs: u64 milliseconds
// outputs: Human-readable duration string
// invariants:
// - seconds/minutes/hours are reduced modulo 60/60/24; days is the unbounded quotient
// - integer truncation only; sub-second remainders are dropped
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Formats a millisecond duration for the report body.
///
/// Durations are unsigned: the API decoder rejects negative ack/close times,
/// so there is no negative case to format.
pub fn human_readable(ms: u64) -> String {
  let seconds = (ms / MS_PER_SECOND) % 60;
  let minutes = (ms / MS_PER_MINUTE) % 60;
  let hours = (ms / MS_PER_HOUR) % 24;
  let days = ms / MS_PER_DAY;

  format!("{days} days, {hours} hours, {minutes} minutes, {seconds} seconds")
}
