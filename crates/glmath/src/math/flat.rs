// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serde support shared by vertices and matrices: both travel as a flat,
//! fixed-length tuple of components (column-major for matrices).

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;
use std::fmt;

struct ExpectedLen(usize);

impl de::Expected for ExpectedLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} components", self.0)
    }
}

pub(crate) fn serialize<S, T>(components: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut tuple = serializer.serialize_tuple(components.len())?;
    for c in components {
        tuple.serialize_element(c)?;
    }
    tuple.end()
}

pub(crate) fn deserialize_into<'de, D, T>(deserializer: D, out: &mut [T]) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct FlatVisitor<'a, T> {
        out: &'a mut [T],
    }

    impl<'de, T: Deserialize<'de>> Visitor<'de> for FlatVisitor<'_, T> {
        type Value = ();

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} components", self.out.len())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
            let len = self.out.len();
            for (i, slot) in self.out.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &ExpectedLen(len)))?;
            }
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(len + 1, &ExpectedLen(len)));
            }
            Ok(())
        }
    }

    let len = out.len();
    deserializer.deserialize_tuple(len, FlatVisitor { out })
}
