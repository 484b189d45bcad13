use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{SmallVector, SmallVectorIndex};

// Upper bound on slots reserved from an untrusted length hint.
const MAX_PREALLOCATED: usize = 4096;

impl<T: Serialize, I: SmallVectorIndex, const N: usize> Serialize for SmallVector<T, I, N> {
    /// Serializes as a sequence, whatever the storage mode.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, I: SmallVectorIndex, const N: usize> Deserialize<'de>
    for SmallVector<T, I, N>
{
    /// Deserializes from a sequence. Sequences longer than `N` end up on the heap.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SmallVectorVisitor<T, I, const N: usize> {
            _marker: PhantomData<(T, I)>,
        }

        impl<'de, T: Deserialize<'de>, I: SmallVectorIndex, const N: usize> Visitor<'de>
            for SmallVectorVisitor<T, I, N>
        {
            type Value = SmallVector<T, I, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = SmallVector::<T, I, N>::new();
                if let Some(hint) = seq.size_hint() {
                    let hint = hint.min(MAX_PREALLOCATED);
                    vec.try_reserve(hint)
                        .map_err(<A::Error as serde::de::Error>::custom)?;
                }

                while let Some(element) = seq.next_element()? {
                    vec.try_push(element)
                        .map_err(<A::Error as serde::de::Error>::custom)?;
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(SmallVectorVisitor {
            _marker: PhantomData,
        })
    }
}
