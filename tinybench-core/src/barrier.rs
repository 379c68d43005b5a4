// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Optimization barrier for timed code.
//!
//! A value passed to [`escape`] is treated by the compiler as read and
//! written by an unknown operation, so the computation that produced it
//! cannot be removed or hoisted out of the timing window.

/// Mark `value` as externally observed.
#[inline(always)]
pub fn escape<T: ?Sized>(value: &T) {
    no_optimize((value as *const T).cast::<u8>());
}

/// Pass `value` through the barrier and hand it back.
#[inline(always)]
pub fn black_box_value<T>(value: T) -> T {
    escape(&value);
    value
}

// The asm block takes the address as input and is not `nomem`, so the
// compiler must assume it reads and clobbers the pointee.
#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
))]
#[inline(always)]
fn no_optimize(data: *const u8) {
    // SAFETY: the asm body is empty; it only consumes a register.
    unsafe {
        core::arch::asm!("/* {0} */", in(reg) data, options(nostack, preserves_flags));
    }
}

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
#[inline(always)]
fn no_optimize(data: *const u8) {
    std::hint::black_box(data);
}
