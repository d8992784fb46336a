//! Conversion between in-memory container metadata and its wire form

use crate::error::TimeConversionError;
use prost_types::Timestamp;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use veilfs_proto::ContainerState;

// Wire timestamps are bounded to years 0001-9999 inclusive.
const TIMESTAMP_SECONDS_MIN: i64 = -62_135_596_800;
const TIMESTAMP_SECONDS_MAX: i64 = 253_402_300_799;

/// Container record as the runtime tracks it.
///
/// This is a plain value type: each notification call constructs and owns
/// its own copy for the duration of one RPC, and nothing is kept afterwards.
/// `init_pid` is a snapshot taken at registration time — the process may
/// exit or its pid be reused later, so consumers must not assume liveness.
/// `hostname` lives only on this side of the channel; the wire schema does
/// not carry it (see [`to_wire`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerMetadata {
    pub id: String,
    pub init_pid: i32,
    pub hostname: String,
    pub ctime: SystemTime,
    pub uid_first: i32,
    pub uid_size: i32,
    pub gid_first: i32,
    pub gid_size: i32,
}

/// Converts a container record to its wire form.
///
/// Everything crosses losslessly except `hostname`, which the wire schema
/// deliberately omits. Fails only when `ctime` falls outside the wire
/// timestamp range.
pub fn to_wire(meta: &ContainerMetadata) -> Result<ContainerState, TimeConversionError> {
    let ctime = system_time_to_timestamp(meta.ctime)?;

    Ok(ContainerState {
        id: meta.id.clone(),
        init_pid: meta.init_pid,
        ctime: Some(ctime),
        uid_first: meta.uid_first,
        uid_size: meta.uid_size,
        gid_first: meta.gid_first,
        gid_size: meta.gid_size,
    })
}

/// Rebuilds a container record from its wire form.
///
/// The wire schema carries no hostname, so the rebuilt record comes back
/// with an empty one.
pub fn from_wire(state: &ContainerState) -> Result<ContainerMetadata, TimeConversionError> {
    let ctime = state
        .ctime
        .as_ref()
        .ok_or(TimeConversionError::Missing)
        .and_then(timestamp_to_system_time)?;

    Ok(ContainerMetadata {
        id: state.id.clone(),
        init_pid: state.init_pid,
        hostname: String::new(),
        ctime,
        uid_first: state.uid_first,
        uid_size: state.uid_size,
        gid_first: state.gid_first,
        gid_size: state.gid_size,
    })
}

fn system_time_to_timestamp(time: SystemTime) -> Result<Timestamp, TimeConversionError> {
    let ts = Timestamp::from(time);

    if !(TIMESTAMP_SECONDS_MIN..=TIMESTAMP_SECONDS_MAX).contains(&ts.seconds) {
        return Err(TimeConversionError::OutOfRange { seconds: ts.seconds });
    }

    Ok(ts)
}

fn timestamp_to_system_time(ts: &Timestamp) -> Result<SystemTime, TimeConversionError> {
    if !(TIMESTAMP_SECONDS_MIN..=TIMESTAMP_SECONDS_MAX).contains(&ts.seconds)
        || !(0..1_000_000_000).contains(&ts.nanos)
    {
        return Err(TimeConversionError::OutOfRange { seconds: ts.seconds });
    }

    // Nanos count forward from the whole second, also for pre-epoch times.
    let whole = if ts.seconds >= 0 {
        UNIX_EPOCH + Duration::from_secs(ts.seconds as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(ts.seconds.unsigned_abs())
    };

    Ok(whole + Duration::from_nanos(ts.nanos as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meta(ctime: SystemTime) -> ContainerMetadata {
        ContainerMetadata {
            id: "c1".to_string(),
            init_pid: 1234,
            hostname: "c1-host".to_string(),
            ctime,
            uid_first: 100_000,
            uid_size: 65_536,
            gid_first: 100_000,
            gid_size: 65_536,
        }
    }

    #[test]
    fn round_trip_preserves_everything_but_hostname() {
        let ctime = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
        let meta = sample_meta(ctime);

        let rebuilt = from_wire(&to_wire(&meta).unwrap()).unwrap();

        assert_eq!(rebuilt.id, meta.id);
        assert_eq!(rebuilt.init_pid, meta.init_pid);
        assert_eq!(rebuilt.ctime, meta.ctime);
        assert_eq!(rebuilt.uid_first, meta.uid_first);
        assert_eq!(rebuilt.uid_size, meta.uid_size);
        assert_eq!(rebuilt.gid_first, meta.gid_first);
        assert_eq!(rebuilt.gid_size, meta.gid_size);
        assert!(rebuilt.hostname.is_empty());
    }

    #[test]
    fn wire_form_has_no_hostname_field_and_correct_values() {
        let ctime = UNIX_EPOCH + Duration::new(1_700_000_000, 500);
        let state = to_wire(&sample_meta(ctime)).unwrap();

        assert_eq!(state.id, "c1");
        assert_eq!(state.init_pid, 1234);
        let ts = state.ctime.unwrap();
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 500);
        assert_eq!(state.uid_first, 100_000);
        assert_eq!(state.gid_size, 65_536);
    }

    #[test]
    fn pre_epoch_ctime_survives_the_round_trip() {
        let ctime = UNIX_EPOCH - Duration::new(5, 250_000_000);
        let meta = sample_meta(ctime);

        let rebuilt = from_wire(&to_wire(&meta).unwrap()).unwrap();
        assert_eq!(rebuilt.ctime, ctime);
    }

    #[test]
    fn ctime_past_year_9999_is_rejected() {
        // ~year 11,000
        let ctime = UNIX_EPOCH + Duration::from_secs(300_000_000_000);
        let err = to_wire(&sample_meta(ctime)).unwrap_err();

        assert!(matches!(err, TimeConversionError::OutOfRange { .. }));
    }

    #[test]
    fn wire_record_without_timestamp_is_rejected() {
        let mut state = to_wire(&sample_meta(SystemTime::now())).unwrap();
        state.ctime = None;

        assert_eq!(from_wire(&state).unwrap_err(), TimeConversionError::Missing);
    }

    #[test]
    fn wire_timestamp_outside_range_is_rejected() {
        let mut state = to_wire(&sample_meta(SystemTime::now())).unwrap();
        state.ctime = Some(Timestamp {
            seconds: TIMESTAMP_SECONDS_MAX + 1,
            nanos: 0,
        });

        assert!(matches!(
            from_wire(&state).unwrap_err(),
            TimeConversionError::OutOfRange { .. }
        ));
    }
}
