//! DER encoding for converting JWK parameters into SubjectPublicKeyInfo
//!
//! aws-lc-rs expects asymmetric public keys as DER SubjectPublicKeyInfo.
//! JWK sets carry raw parameters instead (RSA `n`/`e`, EC `x`/`y`), so the
//! structures are assembled by hand here.

use crate::error::{Error, Result};
use crate::keys::EcCurve;

fn der_len(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else {
        let mut tmp = Vec::new();
        let mut n = len;
        while n > 0 {
            tmp.push((n & 0xFF) as u8);
            n >>= 8;
        }
        tmp.reverse();
        let mut v = Vec::with_capacity(1 + tmp.len());
        v.push(0x80 | (tmp.len() as u8));
        v.extend_from_slice(&tmp);
        v
    }
}

fn der_integer(mut bytes: Vec<u8>) -> Vec<u8> {
    // Positive INTEGER: if MSB set, prepend 0x00
    if bytes.first().is_some_and(|b| b & 0x80 != 0) {
        let mut prefixed = Vec::with_capacity(bytes.len() + 1);
        prefixed.push(0x00);
        prefixed.extend_from_slice(&bytes);
        bytes = prefixed;
    }
    let mut out = Vec::with_capacity(2 + bytes.len());
    out.push(0x02);
    out.extend_from_slice(&der_len(bytes.len()));
    out.extend_from_slice(&bytes);
    out
}

fn der_sequence(children: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + children.len());
    out.push(0x30);
    out.extend_from_slice(&der_len(children.len()));
    out.extend_from_slice(children);
    out
}

fn der_bit_string(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + bytes.len());
    out.push(0x03);
    out.extend_from_slice(&der_len(bytes.len() + 1));
    out.push(0x00); // 0 unused bits
    out.extend_from_slice(bytes);
    out
}

/// Build SubjectPublicKeyInfo DER for RSA from modulus (n) and exponent (e)
pub fn rsa_spki_from_n_e(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    if n.is_empty() || e.is_empty() {
        return Err(Error::MalformedKeySet(
            "rsa key missing n or e".to_string(),
        ));
    }

    // RSAPublicKey = SEQUENCE { n INTEGER, e INTEGER }
    let n_int = der_integer(n.to_vec());
    let e_int = der_integer(e.to_vec());
    let mut rsapk = Vec::with_capacity(n_int.len() + e_int.len());
    rsapk.extend_from_slice(&n_int);
    rsapk.extend_from_slice(&e_int);
    let rsapk_seq = der_sequence(&rsapk);

    // AlgorithmIdentifier for rsaEncryption OID 1.2.840.113549.1.1.1 with NULL params
    const RSA_ENC_OID: &[u8] = &[
        0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01,
    ];
    const NULL_PARAM: &[u8] = &[0x05, 0x00];
    let mut alg_children = Vec::with_capacity(RSA_ENC_OID.len() + NULL_PARAM.len());
    alg_children.extend_from_slice(RSA_ENC_OID);
    alg_children.extend_from_slice(NULL_PARAM);
    let alg_id = der_sequence(&alg_children);

    let spk_bitstr = der_bit_string(&rsapk_seq);

    // SubjectPublicKeyInfo = SEQUENCE { AlgorithmIdentifier, SubjectPublicKey }
    let mut spki_children = Vec::with_capacity(alg_id.len() + spk_bitstr.len());
    spki_children.extend_from_slice(&alg_id);
    spki_children.extend_from_slice(&spk_bitstr);
    Ok(der_sequence(&spki_children))
}

/// Build SubjectPublicKeyInfo DER for an EC public key from x and y coordinates
///
/// The point is encoded uncompressed: `04 || x || y`.
pub fn ec_spki_from_x_y(x: &[u8], y: &[u8], curve: EcCurve) -> Result<Vec<u8>> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::MalformedKeySet(
            "ec key missing x or y".to_string(),
        ));
    }

    let expected_len = match curve {
        EcCurve::P256 => 32,
        EcCurve::P384 => 48,
    };

    let mut x_norm = x.to_vec();
    let mut y_norm = y.to_vec();

    // Strip leading zeros, then left-pad back to the fixed coordinate width
    while x_norm.len() > expected_len && x_norm[0] == 0 {
        x_norm.remove(0);
    }
    while y_norm.len() > expected_len && y_norm[0] == 0 {
        y_norm.remove(0);
    }
    while x_norm.len() < expected_len {
        x_norm.insert(0, 0);
    }
    while y_norm.len() < expected_len {
        y_norm.insert(0, 0);
    }

    if x_norm.len() != expected_len || y_norm.len() != expected_len {
        return Err(Error::MalformedKeySet(format!(
            "ec coordinates have wrong length for curve {curve:?}"
        )));
    }

    let mut point = Vec::with_capacity(1 + x_norm.len() + y_norm.len());
    point.push(0x04);
    point.extend_from_slice(&x_norm);
    point.extend_from_slice(&y_norm);

    // EC OID: 1.2.840.10045.2.1
    const EC_OID: &[u8] = &[0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];

    let curve_oid: &[u8] = match curve {
        // P-256 OID: 1.2.840.10045.3.1.7
        EcCurve::P256 => &[0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07],
        // P-384 OID: 1.3.132.0.34
        EcCurve::P384 => &[0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x22],
    };

    let mut alg_children = Vec::with_capacity(EC_OID.len() + curve_oid.len());
    alg_children.extend_from_slice(EC_OID);
    alg_children.extend_from_slice(curve_oid);
    let alg_id = der_sequence(&alg_children);

    let spk_bitstr = der_bit_string(&point);

    let mut spki_children = Vec::with_capacity(alg_id.len() + spk_bitstr.len());
    spki_children.extend_from_slice(&alg_id);
    spki_children.extend_from_slice(&spk_bitstr);
    Ok(der_sequence(&spki_children))
}
