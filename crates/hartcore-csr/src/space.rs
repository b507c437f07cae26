//! The CSR space of one hart.

use std::ops::Deref;

use hartcore_xlen::Xlen;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{AccessDenied, CsrConfig, CsrDescriptor, CsrNumber, PrivilegeMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Read,
    Write,
}

/// Every CSR of one hart, indexed by number and by name.
///
/// The set of registers is fixed at construction; afterwards only values
/// change, and only through the privilege-gated [`write`](Self::write) and
/// [`update`](Self::update).
#[derive(Clone, Debug)]
pub struct RegisterSpace<X: Xlen> {
    /// Indexed by [`CsrNumber::index`]; `None` where no register is defined.
    regs: Vec<Option<CsrDescriptor<X>>>,
    names: FxHashMap<String, CsrNumber>,
    /// Construction-time values, restored by [`reset`](Self::reset).
    reset_values: Vec<(CsrNumber, X::Reg)>,
}

impl<X: Xlen> RegisterSpace<X> {
    /// Define every machine, supervisor, user and debug register.
    #[must_use]
    pub fn new(config: &CsrConfig) -> Self {
        let mut space = Self {
            regs: vec![None; CsrNumber::COUNT],
            names: FxHashMap::default(),
            reset_values: Vec::new(),
        };
        space.define_machine_regs(config);
        space.define_supervisor_regs(config);
        space.define_user_regs(config);
        space.define_debug_regs(config);

        debug!(
            xlen = X::VALUE,
            defined = space.len(),
            implemented = space.iter().filter(|d| d.is_valid()).count(),
            "CSR space built"
        );
        space
    }

    /// Copy of the register called `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<CsrDescriptor<X>> {
        self.names
            .get(name)
            .and_then(|&number| self.find_by_number(number))
    }

    /// Copy of the register at `number`.
    #[must_use]
    pub fn find_by_number(&self, number: CsrNumber) -> Option<CsrDescriptor<X>> {
        self.regs[number.index()].clone()
    }

    /// Number of the register called `name`.
    #[must_use]
    pub fn number_of(&self, name: &str) -> Option<CsrNumber> {
        self.names.get(name).copied()
    }

    /// Read the register at `number` from privilege mode `mode`.
    ///
    /// # Errors
    ///
    /// Fails if the register is absent or unimplemented, or if `mode` is
    /// below the register's privilege.
    pub fn read(&self, number: CsrNumber, mode: PrivilegeMode) -> Result<X::Reg, AccessDenied> {
        let desc = checked(self.regs[number.index()].as_ref(), number, mode, Access::Read)?;
        Ok(desc.value)
    }

    /// Write the register at `number` from privilege mode `mode`.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read), and also fails for read-only registers in
    /// every mode. Nothing changes on failure.
    pub fn write(
        &mut self,
        number: CsrNumber,
        mode: PrivilegeMode,
        value: X::Reg,
    ) -> Result<(), AccessDenied> {
        let desc = checked(self.regs[number.index()].as_mut(), number, mode, Access::Write)?;
        desc.value = value;
        Ok(())
    }

    /// Replace the value at `number` with `f(old)` and return `old`, under
    /// the same checks as [`write`](Self::write).
    ///
    /// CSR instructions that never write (`csrrs`/`csrrc` with `x0`) should
    /// use [`read`](Self::read) instead, since read-only registers reject
    /// this call.
    ///
    /// # Errors
    ///
    /// As [`write`](Self::write). `f` is not called on failure.
    pub fn update(
        &mut self,
        number: CsrNumber,
        mode: PrivilegeMode,
        f: impl FnOnce(X::Reg) -> X::Reg,
    ) -> Result<X::Reg, AccessDenied> {
        let desc = checked(self.regs[number.index()].as_mut(), number, mode, Access::Write)?;
        let old = desc.value;
        desc.value = f(old);
        Ok(old)
    }

    /// Restore every register to its construction-time value.
    pub fn reset(&mut self) {
        for &(number, value) in &self.reset_values {
            if let Some(desc) = self.regs[number.index()].as_mut() {
                desc.value = value;
            }
        }
    }

    /// Defined registers in number order, implemented or not.
    pub fn iter(&self) -> impl Iterator<Item = &CsrDescriptor<X>> {
        self.regs.iter().flatten()
    }

    /// Number of defined registers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ===== Construction =====

    fn define(&mut self, name: impl Into<String>, number: CsrNumber, valid: bool, value: X::Reg) {
        let name = name.into();
        debug_assert!(
            self.regs[number.index()].is_none(),
            "CSR {number} defined twice"
        );
        self.names.insert(name.clone(), number);
        self.reset_values.push((number, value));
        self.regs[number.index()] = Some(CsrDescriptor::new(name, number, valid, value));
    }

    fn define_machine_regs(&mut self, config: &CsrConfig) {
        let zero = X::Reg::default();
        let rv32 = X::VALUE == 32;

        self.define("mvendorid", CsrNumber::MVENDORID, true, X::from_u64(config.vendor_id));
        self.define("marchid", CsrNumber::MARCHID, true, X::from_u64(config.arch_id));
        self.define("mimpid", CsrNumber::MIMPID, true, X::from_u64(config.impl_id));
        self.define("mhartid", CsrNumber::MHARTID, true, X::from_u64(config.hart_id));

        self.define("mstatus", CsrNumber::MSTATUS, true, zero);
        self.define("misa", CsrNumber::MISA, true, X::from_u64(config.misa(X::VALUE)));
        self.define("medeleg", CsrNumber::MEDELEG, true, zero);
        self.define("mideleg", CsrNumber::MIDELEG, true, zero);
        self.define("mie", CsrNumber::MIE, true, zero);
        self.define("mtvec", CsrNumber::MTVEC, true, zero);
        self.define("mcounteren", CsrNumber::MCOUNTEREN, true, zero);

        self.define("mscratch", CsrNumber::MSCRATCH, true, zero);
        self.define("mepc", CsrNumber::MEPC, true, zero);
        self.define("mcause", CsrNumber::MCAUSE, true, zero);
        self.define("mtval", CsrNumber::MTVAL, true, zero);
        self.define("mip", CsrNumber::MIP, true, zero);

        // Odd pmpcfg registers only exist on RV32.
        for n in 0..4 {
            self.define(format!("pmpcfg{n}"), CsrNumber::pmpcfg(n), rv32 || n % 2 == 0, zero);
        }
        for n in 0..16 {
            self.define(format!("pmpaddr{n}"), CsrNumber::pmpaddr(n), true, zero);
        }

        self.define("mcycle", CsrNumber::MCYCLE, true, zero);
        self.define("minstret", CsrNumber::MINSTRET, true, zero);
        self.define("mcycleh", CsrNumber::MCYCLEH, rv32, zero);
        self.define("minstreth", CsrNumber::MINSTRETH, rv32, zero);
        for n in 3..32 {
            self.define(format!("mhpmcounter{n}"), CsrNumber::mhpmcounter(n), true, zero);
            self.define(format!("mhpmcounter{n}h"), CsrNumber::mhpmcounterh(n), rv32, zero);
            self.define(format!("mhpmevent{n}"), CsrNumber::mhpmevent(n), true, zero);
        }
    }

    fn define_supervisor_regs(&mut self, config: &CsrConfig) {
        let zero = X::Reg::default();
        let valid = config.supervisor;

        self.define("sstatus", CsrNumber::SSTATUS, valid, zero);
        self.define("sedeleg", CsrNumber::SEDELEG, valid, zero);
        self.define("sideleg", CsrNumber::SIDELEG, valid, zero);
        self.define("sie", CsrNumber::SIE, valid, zero);
        self.define("stvec", CsrNumber::STVEC, valid, zero);
        self.define("scounteren", CsrNumber::SCOUNTEREN, valid, zero);

        self.define("sscratch", CsrNumber::SSCRATCH, valid, zero);
        self.define("sepc", CsrNumber::SEPC, valid, zero);
        self.define("scause", CsrNumber::SCAUSE, valid, zero);
        self.define("stval", CsrNumber::STVAL, valid, zero);
        self.define("sip", CsrNumber::SIP, valid, zero);

        self.define("satp", CsrNumber::SATP, valid, zero);
    }

    fn define_user_regs(&mut self, config: &CsrConfig) {
        let zero = X::Reg::default();
        let rv32 = X::VALUE == 32;
        let traps = config.user_traps;

        self.define("ustatus", CsrNumber::USTATUS, traps, zero);
        self.define("uie", CsrNumber::UIE, traps, zero);
        self.define("utvec", CsrNumber::UTVEC, traps, zero);
        self.define("uscratch", CsrNumber::USCRATCH, traps, zero);
        self.define("uepc", CsrNumber::UEPC, traps, zero);
        self.define("ucause", CsrNumber::UCAUSE, traps, zero);
        self.define("utval", CsrNumber::UTVAL, traps, zero);
        self.define("uip", CsrNumber::UIP, traps, zero);

        self.define("fflags", CsrNumber::FFLAGS, config.float, zero);
        self.define("frm", CsrNumber::FRM, config.float, zero);
        self.define("fcsr", CsrNumber::FCSR, config.float, zero);

        self.define("cycle", CsrNumber::CYCLE, true, zero);
        self.define("time", CsrNumber::TIME, true, zero);
        self.define("instret", CsrNumber::INSTRET, true, zero);
        self.define("cycleh", CsrNumber::CYCLEH, rv32, zero);
        self.define("timeh", CsrNumber::TIMEH, rv32, zero);
        self.define("instreth", CsrNumber::INSTRETH, rv32, zero);
        for n in 3..32 {
            self.define(format!("hpmcounter{n}"), CsrNumber::hpmcounter(n), true, zero);
            self.define(format!("hpmcounter{n}h"), CsrNumber::hpmcounterh(n), rv32, zero);
        }
    }

    fn define_debug_regs(&mut self, config: &CsrConfig) {
        let zero = X::Reg::default();
        let valid = config.debug;

        self.define("tselect", CsrNumber::TSELECT, valid, zero);
        self.define("tdata1", CsrNumber::TDATA1, valid, zero);
        self.define("tdata2", CsrNumber::TDATA2, valid, zero);
        self.define("tdata3", CsrNumber::TDATA3, valid, zero);

        self.define("dcsr", CsrNumber::DCSR, valid, zero);
        self.define("dpc", CsrNumber::DPC, valid, zero);
        self.define("dscratch", CsrNumber::DSCRATCH, valid, zero);
    }
}

impl<X: Xlen> Default for RegisterSpace<X> {
    fn default() -> Self {
        Self::new(&CsrConfig::default())
    }
}

/// Apply the access rules to the register found at `number`.
fn checked<X, D>(
    slot: Option<D>,
    number: CsrNumber,
    mode: PrivilegeMode,
    access: Access,
) -> Result<D, AccessDenied>
where
    X: Xlen,
    D: Deref<Target = CsrDescriptor<X>>,
{
    let required = number.privilege();
    let result = match slot {
        None => Err(AccessDenied::Absent(number)),
        Some(desc) if !desc.is_valid() => Err(AccessDenied::Unimplemented(number)),
        Some(_) if mode < required => Err(AccessDenied::Privilege {
            number,
            required,
            current: mode,
        }),
        Some(_) if access == Access::Write && number.is_read_only() => {
            Err(AccessDenied::ReadOnly(number))
        }
        Some(desc) => Ok(desc),
    };
    if let Err(err) = &result {
        trace!(csr = %number, ?access, %mode, reason = %err, "CSR access denied");
    }
    result
}
