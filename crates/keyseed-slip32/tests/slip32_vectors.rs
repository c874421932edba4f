use keyseed_bip39::MnemonicEngine;
use keyseed_primitives::hash::sha512_hmac;
use keyseed_slip32::{
    deserialize_key, serialize_private_key, serialize_public_key, Bip32Path, ExtendedKey,
    KeyNetVersions, Slip32Error,
};

#[derive(serde::Deserialize)]
struct Vector {
    path: Bip32Path,
    chain_code: String,
    private_key: String,
    public_key: String,
    xprv: String,
    xpub: String,
}

#[derive(serde::Deserialize)]
struct Pair {
    xprv: String,
    xpub: String,
}

#[derive(serde::Deserialize)]
struct TestData {
    vectors: Vec<Vector>,
    bad_secret_prefix: String,
    custom: Pair,
}

fn testdata() -> TestData {
    serde_json::from_str(include_str!("testdata/slip32_vectors.json")).unwrap()
}

#[test]
fn test_serialize_vectors() {
    let net = KeyNetVersions::default();
    for v in testdata().vectors {
        let chain_code = hex::decode(&v.chain_code).unwrap();
        let xprv = serialize_private_key(
            &hex::decode(&v.private_key).unwrap(),
            &v.path,
            &chain_code,
            &net,
        )
        .unwrap();
        assert_eq!(xprv, v.xprv, "{}: xprv mismatch", v.path);

        let xpub = serialize_public_key(
            &hex::decode(&v.public_key).unwrap(),
            &v.path,
            &chain_code,
            &net,
        )
        .unwrap();
        assert_eq!(xpub, v.xpub, "{}: xpub mismatch", v.path);
    }
}

#[test]
fn test_deserialize_vectors() {
    let net = KeyNetVersions::default();
    for v in testdata().vectors {
        let private = deserialize_key(&v.xprv, &net).unwrap();
        assert!(!private.is_public());
        assert_eq!(private.path(), &v.path);
        assert_eq!(hex::encode(private.chain_code()), v.chain_code);
        assert_eq!(hex::encode(private.key_bytes()), v.private_key);

        let public = deserialize_key(&v.xpub, &net).unwrap();
        assert!(public.is_public());
        assert_eq!(public.path(), &v.path);
        assert_eq!(hex::encode(public.key_bytes()), v.public_key);

        assert_eq!(private.to_public().unwrap(), public);
    }
}

#[test]
fn test_custom_net_versions() {
    let data = testdata();
    let custom = KeyNetVersions::new("tpub", "tprv");
    let v = &data.vectors[1];

    let private = ExtendedKey::from_slip32(&data.custom.xprv, &custom).unwrap();
    assert_eq!(private.to_slip32(&custom).unwrap(), data.custom.xprv);
    assert_eq!(private.to_slip32(&KeyNetVersions::default()).unwrap(), v.xprv);

    let public = ExtendedKey::from_slip32(&data.custom.xpub, &custom).unwrap();
    assert_eq!(hex::encode(public.key_bytes()), v.public_key);

    assert!(matches!(
        deserialize_key(&v.xprv, &custom),
        Err(Slip32Error::InvalidNetVersion)
    ));
    assert!(matches!(
        deserialize_key(&data.custom.xpub, &KeyNetVersions::default()),
        Err(Slip32Error::InvalidNetVersion)
    ));
}

#[test]
fn test_bad_secret_prefix() {
    assert!(matches!(
        deserialize_key(&testdata().bad_secret_prefix, &KeyNetVersions::default()),
        Err(Slip32Error::InvalidPrivateKeyPrefix(0x01))
    ));
}

#[test]
fn test_master_key_from_mnemonic() {
    let mnemonic = "abandon abandon abandon abandon abandon abandon \
                    abandon abandon abandon abandon abandon about";
    let engine = MnemonicEngine::english().unwrap();
    assert!(engine.check(mnemonic));

    let seed = MnemonicEngine::to_seed(mnemonic, "");
    let digest = sha512_hmac(b"Bitcoin seed", &seed[..]);
    let key = ExtendedKey::private(&digest[..32], Bip32Path::master(), &digest[32..]).unwrap();

    let master = &testdata().vectors[0];
    assert_eq!(key.to_slip32(&KeyNetVersions::default()).unwrap(), master.xprv);
    assert_eq!(
        key.to_public().unwrap().to_slip32(&KeyNetVersions::default()).unwrap(),
        master.xpub
    );
}
