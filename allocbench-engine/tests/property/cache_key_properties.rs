use allocbench_engine::CacheKey;
use proptest::prelude::*;

fn binary() -> impl Strategy<Value = String> {
    "bench_[a-z_0-9]{0,16}"
}

fn key() -> impl Strategy<Value = CacheKey> {
    (binary(), any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>()).prop_map(
        |(binary, tmin, tmax, pmin, pmax, alt)| CacheKey::new(binary, tmin, tmax, pmin, pmax, alt),
    )
}

proptest! {
    #[test]
    fn derivation_is_deterministic(k in key()) {
        prop_assert_eq!(k.file_name(), k.clone().file_name());
    }

    #[test]
    fn equal_names_imply_equal_keys(a in key(), b in key()) {
        if a.file_name() == b.file_name() {
            prop_assert_eq!(a, b);
        } else {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn every_dimension_changes_the_name(
        name in binary(),
        other_name in binary(),
        dims in any::<[u32; 4]>(),
        alt in any::<bool>(),
        which in 0usize..6,
        bump in 1u32..1000,
    ) {
        let [tmin, tmax, pmin, pmax] = dims;
        let base = CacheKey::new(name.clone(), tmin, tmax, pmin, pmax, alt);
        let mut changed = [tmin, tmax, pmin, pmax];
        let varied = match which {
            0 => {
                prop_assume!(other_name != name);
                CacheKey::new(other_name, tmin, tmax, pmin, pmax, alt)
            }
            5 => CacheKey::new(name, tmin, tmax, pmin, pmax, !alt),
            i => {
                changed[i - 1] = changed[i - 1].wrapping_add(bump);
                let [a, b, c, d] = changed;
                CacheKey::new(name, a, b, c, d, alt)
            }
        };
        prop_assert_ne!(base.file_name(), varied.file_name());
    }

    #[test]
    fn trailing_fields_split_from_the_right(k in key()) {
        let name = k.file_name();
        let parts: Vec<&str> = name.rsplitn(6, '_').collect();
        prop_assert_eq!(parts.len(), 6);
        prop_assert_eq!(parts[5], k.binary());
        prop_assert_eq!(parts[0] == "true", k.alternate_allocator());
    }
}
