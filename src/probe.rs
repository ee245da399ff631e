// ---------------------------------------------------------------------------
// Capability probe: does this CPU have a packed unsigned-byte minimum
// that one of our SIMD kernels can use?
// ---------------------------------------------------------------------------

/// Which row kernel family a call will run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// A SIMD tier with a 16-byte unsigned minimum is available.
    VectorCapable,
    /// No usable SIMD tier; every byte goes through the scalar loop.
    ScalarOnly,
}

impl Capability {
    /// Probe the running processor.
    ///
    /// Token summoning is cached by `archmage`, so calling this once per
    /// blend is a handful of atomic loads. Tokens disabled at runtime
    /// (see `archmage::dangerously_disable_tokens_except_wasm`) read as
    /// unavailable here too.
    pub fn detect() -> Self {
        let capability = if vector_tier_available() {
            Capability::VectorCapable
        } else {
            Capability::ScalarOnly
        };
        log::trace!("darken: capability probe -> {capability:?}");
        capability
    }

    /// True for [`Capability::VectorCapable`].
    #[inline]
    pub const fn is_vector(self) -> bool {
        matches!(self, Capability::VectorCapable)
    }
}

#[cfg(target_arch = "x86_64")]
fn vector_tier_available() -> bool {
    use archmage::SimdToken;
    // v1 is the SSE2 baseline; every higher x86 tier implies it.
    archmage::X64V1Token::summon().is_some()
}

#[cfg(target_arch = "aarch64")]
fn vector_tier_available() -> bool {
    use archmage::SimdToken;
    archmage::NeonToken::summon().is_some()
}

#[cfg(target_arch = "wasm32")]
fn vector_tier_available() -> bool {
    use archmage::SimdToken;
    archmage::Wasm128Token::summon().is_some()
}

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "wasm32"
)))]
fn vector_tier_available() -> bool {
    false
}
