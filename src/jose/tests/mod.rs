mod proptest_roundtrip;
