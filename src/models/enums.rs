use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Status columns are free text in storage; these are the values the
// reporting rules give meaning to. Anything else is carried through verbatim.
str_enum!(AppointmentStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
    Missed => "Missed",
    Rescheduled => "Rescheduled",
});

str_enum!(TreatmentStatus {
    Active => "Active",
    Completed => "Completed",
    Cancelled => "Cancelled",
    OnHold => "On Hold",
    Discontinued => "Discontinued",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn treatment_status_round_trips_display_label() {
        let status = TreatmentStatus::from_str("On Hold").unwrap();
        assert_eq!(status, TreatmentStatus::OnHold);
        assert_eq!(status.to_string(), "On Hold");
    }

    #[test]
    fn unknown_status_is_invalid_enum() {
        let err = AppointmentStatus::from_str("completed").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&AppointmentStatus::Missed).unwrap();
        assert_eq!(json, "\"Missed\"");
    }
}
