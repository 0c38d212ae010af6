//! Strongly-typed identifier types for assessment entities.
//!
//! The backend assigns plain integer identifiers to every entity. Wrapping each
//! kind in its own newtype prevents handing a participation id to something that
//! expects a submission id, at no runtime cost.
//!
//! All ID types implement:
//! - Serialization/deserialization as transparent integers
//! - Display formatting
//! - Parsing from strings (route parameters, command-line arguments)

macro_rules! new_id {
    ($struct:ident) => {
        new_id!($struct, "A newtype wrapper around a server-assigned integer id");
    };
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $struct(pub u64);

        impl From<u64> for $struct {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for u64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

new_id!(SubmissionId, "Unique identifier of a submission");
new_id!(ExerciseId, "Unique identifier of an exercise");
new_id!(CourseId, "Unique identifier of a course");
new_id!(UserId, "Unique identifier of a user account");
new_id!(ParticipationId);
new_id!(ResultId);
