use criterion::criterion_main;

mod formatting;


#[cfg(feature = "serde")]
criterion_main!(
    core::core_benches,
    formatting::formatting_benches,
    scaling::scaling_benches,
    async_ops::async_ops_benches,
    features::serde_benches,
);

#[cfg(not(feature = "serde"))]
criterion_main!(
    core::core_benches,
    formatting::formatting_benches,
    scaling::scaling_benches,
    async_ops::async_ops_benches,
);
