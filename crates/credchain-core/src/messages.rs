//! Human-readable titles and reasons carried by verification outcomes.
//!
//! Titles describe the check being performed; reasons describe its result.
//! Callers render these verbatim, so wording changes are user-visible.

// -- Credential structure ------------------------------------------------------

pub const TYPE_KEY_VALIDATE: &str = "Checking Credential type...";
pub const TYPE_KEY_SUCCESS: &str = "Credential type key is present in the credential with valid data.";
pub const TYPE_KEY_ERROR: &str = "Credential type key is not present or having invalid data in the credential.";

pub const CONTEXT_KEY_VALIDATE: &str = "Checking credential @context...";
pub const CONTEXT_KEY_SUCCESS: &str = "Credential @context key is present in the credential with valid data.";
pub const CONTEXT_KEY_ERROR: &str = "Credential @context key is not present or having invalid data in the credential.";

pub const ID_KEY_VALIDATE: &str = "Checking credential id...";
pub const ID_KEY_SUCCESS: &str = "Credential id key is present in the credential with valid data.";
pub const ID_KEY_ERROR: &str = "Credential id key is not present or having invalid data in the credential.";

pub const CREDENTIAL_SUBJECT_KEY_VALIDATE: &str = "Checking credential credentialSubject...";
pub const CREDENTIAL_SUBJECT_KEY_SUCCESS: &str = "Credential subject key is present in the credential with valid data.";
pub const CREDENTIAL_SUBJECT_KEY_ERROR: &str = "Credential credentialSubject key is not present or having invalid data in the credential.";

pub const PROOF_KEY_VALIDATE: &str = "Checking credential proof...";
pub const PROOF_KEY_SUCCESS: &str = "Credential proof key is present in the credential with valid data.";
pub const PROOF_KEY_ERROR: &str = "Credential proof key is not present or having invalid data in the credential.";

pub const ISSUANCE_DATE_KEY_VALIDATE: &str = "Checking issuance date...";
pub const ISSUANCE_DATE_KEY_SUCCESS: &str = "Credential issuance date key is present in the credential with valid data.";
pub const ISSUANCE_DATE_KEY_ERROR: &str = "Credential issuance date key is not present or having invalid data in the credential.";

pub const CREDENTIAL_VALIDATION: &str = "Credential validation";
pub const CREDENTIAL_VALIDATION_SUCCESS: &str = "Credential validation successful.";
pub const CREDENTIAL_VALIDATION_FAILED: &str = "Credential validation failed.";

// -- Issuer profile ------------------------------------------------------------

pub const FETCHING_ISSUER_PROFILE: &str = "Fetching issuer profile...";
pub const FETCHING_ISSUER_PROFILE_SUCCESS: &str = "Fetched issuer profile details successfully.";
pub const FETCHING_ISSUER_PROFILE_ERROR: &str = "Error while fetching issuer profile details.";
pub const ISSUER_KEY_ERROR: &str = "Credential issuer key is not present or having invalid data in the credential.";

pub const ISSUER_PROFILE_VALIDATE: &str = "Checking issuer profile information...";
pub const ISSUER_PROFILE_SUCCESS: &str = "Issuer profile information is valid.";
pub const CONTEXT_ISSUER_PROFILE_KEY_ERROR: &str = "@context key is not present or having invalid data in the issuer profile information.";
pub const TYPE_ISSUER_PROFILE_KEY_ERROR: &str = "type key is not present or having invalid data in the issuer profile information.";
pub const ID_ISSUER_PROFILE_KEY_ERROR: &str = "id key is not present or having invalid data in the issuer profile information.";
pub const NAME_ISSUER_PROFILE_KEY_ERROR: &str = "name key is not present or having invalid data in the issuer profile information.";
pub const EMAIL_ISSUER_PROFILE_KEY_ERROR: &str = "email key is not present or having invalid data in the issuer profile information.";
pub const REVOCATION_LIST_ISSUER_PROFILE_KEY_ERROR: &str = "revocationList key is not present or having invalid data in the issuer profile information.";
pub const PUBLIC_KEY_ISSUER_PROFILE_KEY_ERROR: &str = "publicKey key is not present or having invalid data in the issuer profile information.";

pub const FETCHING_REVOCATION_LIST: &str = "Fetching revocation list...";
pub const FETCHING_REVOCATION_LIST_SUCCESS: &str = "Fetched revocation list details successfully.";
pub const FETCHING_REVOCATION_LIST_ERROR: &str = "Error while fetching revocation list.";

// -- Revocation and expiry -----------------------------------------------------

pub const REVOCATION_STATUS_VALIDATE: &str = "Checking revocation status...";
pub const CREDENTIAL_NOT_REVOKED: &str = "Credential is valid and not revoked.";
pub const CREDENTIAL_REVOKED: &str = "Credential has been revoked.";
pub const CONTEXT_REVOCATION_LIST_KEY_ERROR: &str = "@context key is not present or having invalid data in the revocation list.";
pub const TYPE_REVOCATION_LIST_KEY_ERROR: &str = "type key is not present or having invalid data in the revocation list.";
pub const ID_REVOCATION_LIST_KEY_ERROR: &str = "id key is not present or having invalid data in the revocation list.";
pub const ISSUER_REVOCATION_LIST_KEY_ERROR: &str = "issuer key is not present or having invalid data in the revocation list.";
pub const REVOKED_ASSERTIONS_REVOCATION_LIST_KEY_ERROR: &str = "revokedAssertions key is not present or having invalid data in the revocation list.";

pub const VALID_UNTIL_DATE_VALIDATE: &str = "Checking credential validUntil...";
pub const VALID_UNTIL_DATE_SUCCESS: &str = "Credential has not expired.";
pub const VALID_UNTIL_DATE_ABSENT: &str = "Credential carries no validUntil date.";
pub const VALID_UNTIL_DATE_ERROR: &str = "Credential is expired.";

// -- Checksum ------------------------------------------------------------------

pub const FETCHING_NORMALIZED_DECODED_DATA: &str = "Fetching normalized and decoded data started...";
pub const FETCHING_NORMALIZED_DECODED_DATA_SUCCESS: &str = "Fetched normalized and decoded data successfully.";
pub const FETCHING_NORMALIZED_DECODED_DATA_ERROR: &str = "Error while fetching normalized and decoded data.";

pub const ANCHOR_DECODED_DATA_KEY_VALIDATE: &str = "Checking decoded data anchors...";
pub const ANCHOR_DECODED_DATA_KEY_SUCCESS: &str = "anchors key is present with valid data.";
pub const ANCHOR_DECODED_DATA_KEY_ERROR: &str = "anchors key is not present or having invalid data list.";

pub const PATH_DECODED_DATA_KEY_VALIDATE: &str = "Checking decoded data path...";
pub const PATH_DECODED_DATA_KEY_SUCCESS: &str = "path key is present with valid data.";
pub const PATH_DECODED_DATA_KEY_ERROR: &str = "path key is not present or having invalid data list.";

pub const MERKLEROOT_DECODED_DATA_KEY_VALIDATE: &str = "Checking decoded data merkleRoot...";
pub const MERKLEROOT_DECODED_DATA_KEY_SUCCESS: &str = "merkleRoot key is present with valid data.";
pub const MERKLEROOT_DECODED_DATA_KEY_ERROR: &str = "merkleRoot key is not present or having invalid data.";

pub const TARGETHASH_DECODED_DATA_KEY_VALIDATE: &str = "Checking decoded data targetHash...";
pub const TARGETHASH_DECODED_DATA_KEY_SUCCESS: &str = "targetHash key is present with valid data.";
pub const TARGETHASH_DECODED_DATA_KEY_ERROR: &str = "targetHash key is not present or having invalid data.";

pub const BLOCKCHAIN_DATA_VALIDATE: &str = "Fetching anchoring transaction...";
pub const SELECTED_ANCHOR_RETRIEVAL_ERROR: &str = "Failed to retrieve selected anchor.";
pub const REQUIRED_VALUES_RETRIEVAL_ERROR: &str = "Failed to retrieve required values from the selected anchor.";
pub const NO_MATCHING_API_FOUND_ERROR: &str = "No matching API found.";
pub const URL_OR_APIKEY_RETRIEVAL_ERROR: &str = "Failed to retrieve URL or API key from the matched API.";
pub const DATA_FETCHED_SUCCESS: &str = "Data successfully fetched from the blockchain API.";
pub const TRANSACTION_NOT_FOUND_ERROR: &str = "Transaction not found.";
pub const ANCHOR_PAYLOAD_MISMATCH_ERROR: &str = "The anchoring transaction does not carry the merkleRoot.";

pub const MERKLE_PROOF_VALIDATE: &str = "Checking merkle root...";
pub const CALCULATED_HASH_MATCHES_WITH_MERKLEROOT: &str = "The calculated hash matches the provided merkleRoot.";
pub const CALCULATED_HASH_DIFFER_FROM_MERKLEROOT: &str = "The calculated hash does not match the provided merkleRoot.";

pub const SIGNATURE_VALIDATE: &str = "Checking Ed25519 signature...";
pub const SIGNATURE_VALID: &str = "The Ed25519 signature is valid for the issuer public key.";
pub const SIGNATURE_INVALID: &str = "The Ed25519 signature does not verify against the issuer public key.";
pub const PUBLIC_KEY_RETRIEVAL_ERROR: &str = "Unable to retrieve the issuer public key.";

pub const VALIDATE_TARGET_HASH: &str = "Comparing hashes...";
pub const CALCULATED_HASH_MATCHES_WITH_TARGETHASH: &str = "The calculated hash matches the provided targetHash.";
pub const CALCULATED_HASH_DIFFER_FROM_TARGETHASH: &str = "The calculated hash does not match the provided targetHash.";

pub const CHECKSUM_VALIDATION: &str = "Checksum validation";
pub const CHECKSUM_VALIDATION_SUCCESS: &str = "Checksum validation successful.";
pub const CHECKSUM_VALIDATION_FAILED: &str = "Checksum validation failed.";

// -- Overall -------------------------------------------------------------------

pub const VERIFY_CREDENTIAL: &str = "Verifying credential";
pub const VERIFIED: &str = "Verified";
pub const FAILED: &str = "Failed";
