use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_invalid() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("foobar");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("recognized"));

    Ok(())
}

#[test]
fn command_pair_ties() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("pair")
        .arg("AA")
        .arg("A")
        .arg("--gap")
        .arg("1")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        ">seq1\nAA\n>seq2\n_A\n\n>seq1\nAA\n>seq2\nA_\n\n"
    );

    Ok(())
}

#[test]
fn command_pair_local() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("pair")
        .arg("GTTGAC")
        .arg("GTTAC")
        .arg("--match")
        .arg("2")
        .arg("--mismatch")
        .arg("-1")
        .arg("--local")
        .arg("--gap")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">seq1\nGTTGAC\n>seq2\nGTT_AC\n\n");

    // nothing scores above 0
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("pair")
        .arg("AAA")
        .arg("CCC")
        .arg("--local")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn command_pair_affine() -> anyhow::Result<()> {
    // extend 1, open 3: one gap of 2 beats two gaps of 1
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("pair")
        .arg("A")
        .arg("AGG")
        .arg("--match")
        .arg("5")
        .arg("--mismatch")
        .arg("-5")
        .arg("--gap")
        .arg("1")
        .arg("3")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">seq1\nA__\n>seq2\nAGG\n\n");

    Ok(())
}

#[test]
fn command_pair_too_many_gap_values() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("pair")
        .arg("A")
        .arg("A")
        .arg("--gap")
        .arg("1")
        .arg("2")
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gap penalty configuration error"));

    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("pair")
        .arg("A")
        .arg("A")
        .arg("--gap")
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gap penalty configuration error"));

    Ok(())
}

#[test]
fn command_sw_files() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("sw")
        .arg("tests/fasta/test1a.fa")
        .arg("tests/fasta/test1b.fa")
        .arg("--matrix")
        .arg("tests/matrix/testMX.txt")
        .arg("--gap")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">test1a\nGTTGAC\n>test1b\nGTT_AC\n\n");

    Ok(())
}

#[test]
fn command_nw_files() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("nw")
        .arg("tests/fasta/gcatgcg.txt")
        .arg("tests/fasta/gattaca.fa")
        .arg("--matrix")
        .arg("tests/matrix/unit.txt")
        .arg("--gap")
        .arg("1")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 15);
    assert_eq!(stdout.matches(">gcatgcg\n").count(), 3);
    assert_eq!(stdout.matches(">gattaca\nG_ATTACA\n").count(), 3);
    assert!(stdout.starts_with(">gcatgcg\nGCA_TGCG\n"));
    assert!(stdout.contains("GCAT_GCG"));
    assert!(stdout.contains("GCATG_CG"));

    Ok(())
}

#[test]
fn command_nw_three_letter_matrix() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("nw")
        .arg("tests/fasta/prot1.fa")
        .arg("tests/fasta/prot2.txt")
        .arg("--matrix")
        .arg("tests/matrix/aa3.txt")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">prot1\nAVW\n>prot2\nA_W\n\n");

    Ok(())
}

#[test]
fn command_nw_stdin_outfile() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let outfile = temp.path().join("out.fa");

    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("nw")
        .arg("stdin")
        .arg("tests/fasta/test1b.fa")
        .arg("--matrix")
        .arg("tests/matrix/testMX.txt")
        .arg("-o")
        .arg(&outfile)
        .write_stdin(">query\nGTTGAC\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&outfile)?;
    assert_eq!(content, ">query\nGTTGAC\n>test1b\nGTT_AC\n\n");

    Ok(())
}

#[test]
fn command_nw_verbose() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("nw")
        .arg("tests/fasta/test1a.fa")
        .arg("tests/fasta/test1b.fa")
        .arg("--matrix")
        .arg("tests/matrix/testMX.txt")
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("==> Inputs"))
        .stderr(predicate::str::contains("gap  = linear(3)"))
        .stderr(predicate::str::contains("score      = 7"))
        .stderr(predicate::str::contains("alignments = 1"));

    Ok(())
}

#[test]
fn command_nw_bad_inputs() -> anyhow::Result<()> {
    // ragged matrix
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("nw")
        .arg("tests/fasta/test1a.fa")
        .arg("tests/fasta/test1b.fa")
        .arg("--matrix")
        .arg("tests/matrix/ragged.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scoring matrix error"));

    // symbol outside the alphabet
    let temp = TempDir::new()?;
    let input = temp.path().join("n.fa");
    fs::write(&input, ">n\nGTNAC\n")?;

    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("nw")
        .arg("tests/fasta/test1a.fa")
        .arg(&input)
        .arg("--matrix")
        .arg("tests/matrix/testMX.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No score for the pair"));

    // missing file
    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("sw")
        .arg("tests/fasta/not_there.fa")
        .arg("tests/fasta/test1b.fa")
        .arg("--matrix")
        .arg("tests/matrix/testMX.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open"));

    Ok(())
}

#[test]
fn command_sw_dna_full() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("sw")
        .arg("tests/fasta/test2a.txt")
        .arg("tests/fasta/test2b.txt")
        .arg("--matrix")
        .arg("tests/matrix/DNAfull.txt")
        .arg("--gap")
        .arg("1")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">test2a\nTACGGGCCCGCTA_C\n>test2b\nTA___G_CC_CTATC\n\n");

    Ok(())
}

#[test]
fn command_sw_dna_full_affine() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("sw")
        .arg("tests/fasta/test2a.txt")
        .arg("tests/fasta/test2b.txt")
        .arg("--matrix")
        .arg("tests/matrix/DNAfull.txt")
        .arg("-v")
        .arg("--gap")
        .arg("1")
        .arg("5")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(stdout, ">test2a\nTACGGGCCCGCTA\n>test2b\nTA___GCC__CTA\n\n");
    assert!(stderr.contains("gap  = affine(open=5, extend=1)"));
    assert!(stderr.contains("score      = 25"));

    Ok(())
}

#[test]
fn command_nw_dna_full() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("nw")
        .arg("tests/fasta/testNW1a.txt")
        .arg("tests/fasta/testNW1b.txt")
        .arg("--matrix")
        .arg("tests/matrix/DNAfull.txt")
        .arg("--gap")
        .arg("4")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">testNW1a\n_ATCGAC\n>testNW1b\nCAT__AC\n\n");

    Ok(())
}

#[test]
fn command_pair_mode() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwsw")?;
    let output = cmd
        .arg("pair")
        .arg("GTTGAC")
        .arg("GTTAC")
        .arg("--match")
        .arg("2")
        .arg("--mismatch")
        .arg("-1")
        .arg("--mode")
        .arg("sw")
        .arg("--gap")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">seq1\nGTTGAC\n>seq2\nGTT_AC\n\n");

    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("pair")
        .arg("AA")
        .arg("A")
        .arg("--mode")
        .arg("Global")
        .arg("--gap")
        .arg("1")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(">seq2\n_A\n")
                .and(predicate::str::contains(">seq2\nA_\n")),
        );

    let mut cmd = Command::cargo_bin("nwsw")?;
    cmd.arg("pair")
        .arg("A")
        .arg("A")
        .arg("--mode")
        .arg("semi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown alignment mode: semi"));

    Ok(())
}
