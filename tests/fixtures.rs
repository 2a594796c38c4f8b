use composite_hash::{
    compute_composite_hash, fnv1a_64, DeriveConfig, HalfOrder, Halves, IndexDeriver, IndexError,
};

const FOX: &str = "The quick brown fox jumps over the lazy dog.";

#[test]
fn hello_end_to_end() {
    let got = compute_composite_hash(b"hello", 3, 100).unwrap();
    assert_eq!(got, vec![63, 86, 7]);
    assert!(got.iter().all(|&i| i < 100));
}

#[test]
fn empty_content_hashes_to_offset_basis() {
    assert_eq!(fnv1a_64(b""), 0xcbf29ce484222325);
    assert_eq!(compute_composite_hash(b"", 4, 1000).unwrap(), vec![733, 162, 593, 322]);
}

#[test]
fn standard_order_vectors() {
    let cases: &[(&str, u32, u32, &[u32])] = &[
        (FOX, 3, 47_925, &[19091, 1009, 30854]),
        ("123", 6, 95_850, &[61403, 52592, 43783, 34976, 1525, 88572]),
        (
            "初音ミクはかわいいですか",
            9,
            1_437_758_756,
            &[
                784776810, 1429537678, 636539792, 1262991692, 469993810, 1114754686, 321756808,
                966517688, 173519814,
            ],
        ),
    ];
    for &(content, k, m, want) in cases {
        assert_eq!(compute_composite_hash(content.as_bytes(), k, m).unwrap(), want, "{content:?}");
    }
}

/// Tables written by the old extension module: FNV-1 digest, swapped halves.
#[test]
fn legacy_profile_matches_deployed_tables() {
    let cases: &[(&str, u32, u32, &[u32])] = &[
        (FOX, 3, 47_925, &[106, 28839, 9649]),
        (FOX, 3, 479_252, &[182036, 20641, 338500]),
        (FOX, 3, 4_792_529, &[2573904, 4330228, 1294025]),
        (FOX, 3, 47_925_291, &[40914088, 47462949, 6086521]),
        (FOX, 3, 479_252_918, &[424316384, 47462917, 149862370]),
        ("123", 6, 95_850, &[33468, 87452, 70234, 28372, 11158, 89796]),
        ("asd", 6, 958_505, &[817997, 798561, 685518, 666086, 553047, 440010]),
        ("123asd", 6, 9_585_058, &[6968780, 5734018, 4499258, 2403188, 1168432, 8657424]),
        (
            "asd123(*#^!",
            6,
            95_850_583,
            &[68148260, 32510192, 74413770, 38775706, 3137644, 45041228],
        ),
        (
            "初音ミクはかわいいですか",
            9,
            1_437_758_756,
            &[
                1109719310, 165476191, 640682858, 1115889527, 153337442, 628544115, 1103750790,
                141198711, 616405390,
            ],
        ),
    ];
    for &(content, k, m, want) in cases {
        let d = IndexDeriver::legacy(k, m).unwrap();
        assert_eq!(d.indices_str(content), want, "{content:?} k={k} m={m}");
    }
}

#[test]
fn legacy_differs_from_standard() {
    let legacy = IndexDeriver::legacy(3, 47_925).unwrap();
    let standard = IndexDeriver::new(3, 47_925).unwrap();
    assert_ne!(legacy.indices_str(FOX), standard.indices_str(FOX));
}

#[test]
fn swapped_order_alone_uses_fnv1a() {
    let d = IndexDeriver::from_config(DeriveConfig {
        k: 3,
        m: 100,
        half_order: HalfOrder::Swapped,
        ..Default::default()
    })
    .unwrap();
    let h = Halves::split(fnv1a_64(b"hello"));
    let want: Vec<u32> = (0..3u32)
        .map(|i| h.upper.wrapping_add(i.wrapping_mul(h.lower)).wrapping_add(i * i) % 100)
        .collect();
    assert_eq!(d.indices(b"hello"), want);
}

#[test]
fn zero_parameters_are_invalid_arguments() {
    let err = compute_composite_hash(b"hello", 0, 100).unwrap_err();
    assert!(matches!(err, IndexError::ZeroHashCount));
    assert!(err.is_invalid_argument());

    let err = compute_composite_hash(b"hello", 3, 0).unwrap_err();
    assert!(matches!(err, IndexError::ZeroTableSize));
    assert!(err.is_invalid_argument());
}
