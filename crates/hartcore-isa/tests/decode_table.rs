//! Integration tests for the built-in decode table.

use hartcore_isa::{
    AliasPolicy, DecodeConfig, DecodeTable, ExtensionSet, FeaturePolicy, FirstMatch, InstId,
    InstructionDescriptor, MAX_OPERANDS, Matches, OP_ADDI, OP_C_ADDIW, OP_C_FLW, OP_C_FLWSP, OP_C_FSW,
    OP_C_FSWSP, OP_C_JAL, OP_C_LD, OP_C_LDSP, OP_C_SD, OP_C_SDSP, OP_CSRRW, OP_FLD, OP_FLW,
    OP_FMV_D_X, OP_URET, OperandMode, OperandType, RS3_MASK, instruction_size, is_compressed,
};
use proptest::prelude::*;

fn rv32() -> FeaturePolicy {
    FeaturePolicy::new(DecodeConfig::rv32gc())
}

fn rv64() -> FeaturePolicy {
    FeaturePolicy::new(DecodeConfig::rv64gc())
}

fn decode_name(table: &DecodeTable, word: u32, policy: &impl AliasPolicy) -> &'static str {
    table.decode(word, policy).name()
}

#[test]
fn test_standard_descriptors_are_consistent() {
    let table = DecodeTable::standard();
    for desc in &table {
        assert_eq!(desc.code() & !desc.mask(), 0, "{}", desc.name());
        for i in 0..MAX_OPERANDS {
            assert_eq!(desc.operand_mask(i) & desc.mask(), 0, "{} operand {i}", desc.name());
        }
        assert!(desc.matches(desc.code()), "{}", desc.name());
        assert_eq!(table.by_name(desc.name()).id(), desc.id());
        assert_eq!(table.by_id(desc.id()).name(), desc.name());
        assert!(table.contains_id(desc.id()));
        assert!(table.contains_name(desc.name()));
    }
}

#[test]
fn test_ids_are_dense() {
    let table = DecodeTable::standard();
    let mut ids: Vec<u16> = table.iter().map(|d| d.id().raw()).collect();
    ids.sort_unstable();
    let expected: Vec<u16> = (1..=u16::try_from(table.len()).unwrap()).collect();
    assert_eq!(ids, expected);
    assert_eq!(table.len(), 203);
    assert_eq!(table.by_id(OP_FLW).name(), "flw");
    assert_eq!(table.by_id(OP_FLD).name(), "fld");
    assert_eq!(OP_FMV_D_X.index() + 1, OP_URET.index());
    assert_eq!(table.by_id(OP_C_SDSP).name(), "c.sdsp");
}

#[test]
fn test_illegal_fallback() {
    let table = DecodeTable::standard();
    let illegal = table.by_name("not-an-instruction");
    assert_eq!(illegal.id(), InstId::ILLEGAL);
    assert_eq!(illegal, DecodeTable::illegal());
    assert_eq!(illegal.operand_count(), 0);
    assert_eq!(illegal.operand_type(0), OperandType::None);
    assert_eq!(table.by_id(InstId::new(u16::MAX)).name(), "illegal");

    // No major opcode 0x7F in the table.
    assert!(table.candidates(0xFFFF_FFFF).is_none());
    assert_eq!(table.decode(0xFFFF_FFFF, &FirstMatch).id(), InstId::ILLEGAL);
}

#[test]
fn test_csr_instruction_operands() {
    let table = DecodeTable::standard();
    // csrrw x1, mscratch, x2
    let word = 0x3401_10F3;
    let desc = table.decode(word, &rv64());
    assert_eq!(desc.id(), OP_CSRRW);
    assert!(desc.is_csr());
    assert_eq!(desc.operand_type(0), OperandType::IntReg);
    assert_eq!(desc.operand_mode(0), OperandMode::Write);
    assert_eq!(desc.operand_type(1), OperandType::CsReg);
    assert_eq!(desc.operand_mode(1), OperandMode::ReadWrite);
    assert_eq!(desc.operand_type(2), OperandType::IntReg);
    assert_eq!(desc.operand_bits(0, word), 1);
    assert_eq!(desc.operand_bits(1, word), 0x340);
    assert_eq!(desc.operand_bits(2, word), 2);
}

#[test]
fn test_categories() {
    let table = DecodeTable::standard();
    assert!(table.by_name("lw").is_load());
    assert!(table.by_name("sd").is_store());
    assert!(table.by_name("lr.w").is_load());
    assert!(table.by_name("sc.d").is_store());
    assert!(table.by_name("amoadd.w").is_load());
    assert!(table.by_name("mulhu").is_multiply());
    assert!(table.by_name("remuw").is_divide());
    assert!(table.by_name("bgeu").is_branch());
    assert!(table.by_name("c.j").is_branch());
    assert!(table.by_name("fadd.d").is_float());
    assert!(!table.by_id(OP_ADDI).is_load());
    assert!(!table.by_id(OP_ADDI).is_branch());
}

#[test]
fn test_full_size_decodes() {
    let table = DecodeTable::standard();
    // mul x3, x1, x2
    assert_eq!(decode_name(&table, 0x0220_81B3, &rv64()), "mul");
    // lw x5, 8(x2)
    assert_eq!(decode_name(&table, 0x0081_2283, &rv32()), "lw");
    // ecall / ebreak / mret
    assert_eq!(decode_name(&table, 0x0000_0073, &rv32()), "ecall");
    assert_eq!(decode_name(&table, 0x0010_0073, &rv32()), "ebreak");
    assert_eq!(decode_name(&table, 0x3020_0073, &rv32()), "mret");
}

#[test]
fn test_floating_point_decodes() {
    let table = DecodeTable::standard();
    let cases = [
        // fmadd.s f1, f2, f3, f4
        (0x2031_70C3, "fmadd.s"),
        (0x2031_70C7, "fmsub.s"),
        (0x2031_70CB, "fnmsub.s"),
        (0x2031_70CF, "fnmadd.s"),
        // fmadd.d f1, f2, f3, f4
        (0x2231_70C3, "fmadd.d"),
        // fsgnj.d / fsgnjn.d / fsgnjx.d f1, f2, f3
        (0x2231_00D3, "fsgnj.d"),
        (0x2231_10D3, "fsgnjn.d"),
        (0x2231_20D3, "fsgnjx.d"),
        (0x2A31_00D3, "fmin.d"),
        (0x2A31_10D3, "fmax.d"),
        // feq.d / flt.d / fle.d x1, f2, f3
        (0xA231_20D3, "feq.d"),
        (0xA231_10D3, "flt.d"),
        (0xA231_00D3, "fle.d"),
        (0xE201_10D3, "fclass.d"),
        (0x4201_00D3, "fcvt.d.s"),
        (0x4011_70D3, "fcvt.s.d"),
        (0xC201_70D3, "fcvt.w.d"),
        (0xC211_70D3, "fcvt.wu.d"),
        (0xD201_00D3, "fcvt.d.w"),
        (0xD211_00D3, "fcvt.d.wu"),
    ];
    for (word, name) in cases {
        assert_eq!(decode_name(&table, word, &rv64()), name, "{word:#x}");
        assert_eq!(decode_name(&table, word, &rv32()), name, "{word:#x}");
    }

    let no_double = FeaturePolicy::new(DecodeConfig::rv64gc().without_extension(ExtensionSet::D));
    assert_eq!(decode_name(&table, 0x2231_00D3, &no_double), "illegal");
    assert_eq!(decode_name(&table, 0x2031_70C3, &no_double), "fmadd.s");
}

#[test]
fn test_fp_long_forms_need_rv64() {
    let table = DecodeTable::standard();
    let cases = [
        (0xC021_00D3, "fcvt.l.s"),
        (0xC031_00D3, "fcvt.lu.s"),
        (0xD021_00D3, "fcvt.s.l"),
        (0xD031_00D3, "fcvt.s.lu"),
        (0xC221_00D3, "fcvt.l.d"),
        (0xC231_00D3, "fcvt.lu.d"),
        (0xD221_00D3, "fcvt.d.l"),
        (0xD231_00D3, "fcvt.d.lu"),
        (0xE201_00D3, "fmv.x.d"),
        (0xF201_00D3, "fmv.d.x"),
    ];
    for (word, name) in cases {
        assert_eq!(decode_name(&table, word, &rv64()), name, "{word:#x}");
        assert_eq!(decode_name(&table, word, &rv32()), "illegal", "{word:#x}");
    }
}

#[test]
fn test_fused_operands() {
    let table = DecodeTable::standard();
    // fnmadd.d f5, f6, f7, f8
    let word = 0x4273_02CF;
    let desc = table.decode(word, &rv64());
    assert_eq!(desc.name(), "fnmadd.d");
    assert_eq!(desc.operand_count(), 3);
    assert_eq!(desc.operand_type(0), OperandType::FpReg);
    assert_eq!(desc.operand_mode(0), OperandMode::Write);
    assert_eq!(desc.operand_bits(0, word), 5);
    assert_eq!(desc.operand_bits(1, word), 6);
    assert_eq!(desc.operand_bits(2, word), 7);
    assert_eq!((word & RS3_MASK) >> 27, 8);
}

#[test]
fn test_rv64_only_rejected_on_rv32() {
    let table = DecodeTable::standard();
    // ld x5, 8(x2)
    let word = 0x0081_3283;
    assert!(matches!(table.candidates(word), Matches::Unique(d) if d.name() == "ld"));
    assert_eq!(decode_name(&table, word, &rv64()), "ld");
    assert_eq!(decode_name(&table, word, &rv32()), "illegal");
    // FirstMatch ignores width.
    assert_eq!(decode_name(&table, word, &FirstMatch), "ld");
}

#[test]
fn test_compressed_aliases_follow_xlen() {
    let table = DecodeTable::standard();
    let pairs = [
        (0x6000, OP_C_FLW, OP_C_LD),
        (0xE000, OP_C_FSW, OP_C_SD),
        (0x2085, OP_C_JAL, OP_C_ADDIW),
        (0x6082, OP_C_FLWSP, OP_C_LDSP),
        (0xE002, OP_C_FSWSP, OP_C_SDSP),
    ];
    for (word, rv32_id, rv64_id) in pairs {
        let matches = table.candidates(word);
        assert!(matches.is_aliased(), "{word:#x}");
        assert_eq!(table.decode(word, &rv32()).id(), rv32_id, "{word:#x}");
        assert_eq!(table.decode(word, &rv64()).id(), rv64_id, "{word:#x}");

        let aliases: Vec<InstId> = table.aliases(rv32_id).iter().map(|d| d.id()).collect();
        assert_eq!(aliases, [rv64_id]);
        let aliases: Vec<InstId> = table.aliases(rv64_id).iter().map(|d| d.id()).collect();
        assert_eq!(aliases, [rv32_id]);
    }
}

#[test]
fn test_alias_rejected_without_extension() {
    let table = DecodeTable::standard();
    let no_float = FeaturePolicy::new(DecodeConfig::rv32gc().without_extension(ExtensionSet::F));
    assert_eq!(decode_name(&table, 0x6000, &no_float), "illegal");
    let no_compressed =
        FeaturePolicy::new(DecodeConfig::rv64gc().without_extension(ExtensionSet::C));
    assert_eq!(decode_name(&table, 0x6000, &no_compressed), "illegal");
}

#[test]
fn test_specific_mask_wins() {
    let table = DecodeTable::standard();
    // ret = c.jr x1, also matches c.mv
    assert_eq!(table.candidates(0x8082).len(), 2);
    assert_eq!(decode_name(&table, 0x8082, &rv64()), "c.jr");
    // c.mv x1, x2
    assert_eq!(decode_name(&table, 0x808A, &rv64()), "c.mv");
    // c.ebreak also matches c.jalr and c.add
    assert_eq!(table.candidates(0x9002).len(), 3);
    assert_eq!(decode_name(&table, 0x9002, &rv32()), "c.ebreak");
    // c.jalr x1, also matches c.add
    assert_eq!(decode_name(&table, 0x9082, &rv32()), "c.jalr");
    // c.add x1, x2
    assert_eq!(decode_name(&table, 0x908A, &rv32()), "c.add");
    // c.nop over c.addi
    assert_eq!(decode_name(&table, 0x0001, &rv32()), "c.nop");
    assert_eq!(decode_name(&table, 0x0085, &rv32()), "c.addi");
    // c.addi16sp over c.lui
    assert_eq!(decode_name(&table, 0x7101, &rv64()), "c.addi16sp");
    assert_eq!(decode_name(&table, 0x6085, &rv64()), "c.lui");
}

#[test]
fn test_compressed_ignores_upper_halfword() {
    let table = DecodeTable::standard();
    // Fetch windows may carry the next parcel in the upper half.
    assert_eq!(decode_name(&table, 0xDEAD_8082, &rv64()), "c.jr");
}

#[test]
fn test_instruction_sizes() {
    let table = DecodeTable::standard();
    for desc in &table {
        let expected = if is_compressed(desc.code()) { 2 } else { 4 };
        assert_eq!(desc.size(), expected, "{}", desc.name());
    }
    assert_eq!(instruction_size(0x0000_0013), 4);
    assert_eq!(instruction_size(0x0000_8082), 2);
}

#[test]
fn test_custom_table() {
    let nop = InstructionDescriptor::new(
        "x.nop",
        InstId::new(1),
        0x0000_000B,
        0xFFFF_FFFF,
        hartcore_isa::InstCategory::Int,
    );
    let table = DecodeTable::try_new(&[nop]).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(decode_name(&table, 0x0000_000B, &FirstMatch), "x.nop");
    assert_eq!(decode_name(&table, 0x0000_0013, &FirstMatch), "illegal");
}

proptest! {
    #[test]
    fn candidates_match_linear_scan(word in any::<u32>()) {
        let table = DecodeTable::standard();
        let scan: Vec<&InstructionDescriptor> = table.iter().filter(|d| d.matches(word)).collect();
        let candidates = table.candidates(word);
        prop_assert_eq!(candidates.as_slice(), scan.as_slice());
    }

    #[test]
    fn decode_result_matches_and_is_available(word in any::<u32>(), wide in any::<bool>()) {
        let table = DecodeTable::standard();
        let config = if wide { DecodeConfig::rv64gc() } else { DecodeConfig::rv32gc() };
        let desc = table.decode(word, &FeaturePolicy::new(config));
        if !desc.id().is_illegal() {
            prop_assert!(desc.matches(word));
            prop_assert!(desc.is_available(&config));
        }
    }

    #[test]
    fn size_follows_low_bits(word in any::<u32>()) {
        let size = instruction_size(word);
        prop_assert_eq!(size == 4, word & 3 == 3);
        prop_assert!(size == 2 || size == 4);
    }
}
