//! Registry of pre-assigned identifiers.
//!
//! Every id here must be unique across the whole benchmark system. Ids of
//! per-thread execution configs are derived from
//! [`IREE_MODULE_EXECUTION_CONFIG_LOCAL_TASK_BASE`] by appending `_<threads>`.

// Compile configs.
pub const IREE_COMPILE_CONFIG_LINUX_CASCADELAKE: &str = "e7e18b0f-c72d-4f1c-89b1-5afee70df6e9";

// Execution configs.
pub const IREE_MODULE_EXECUTION_CONFIG_LOCAL_SYNC: &str = "13fc65a9-e5dc-4cbb-9c09-25b0b08f4c03";
pub const IREE_MODULE_EXECUTION_CONFIG_LOCAL_TASK_BASE: &str =
    "c7c4a15e-b20c-4898-bb4a-864f58ca9e6c";

// Models.
pub const TFLITE_DEEPLABV3_FP32: &str = "c36c63b0-220a-4d78-8ade-c45ce47d89d3";
pub const TFLITE_MOBILESSD_FP32: &str = "0e466f69-91d6-4e50-b62b-a82b6213a231";
pub const TFLITE_POSENET_FP32: &str = "5afc3014-d29d-4e88-a840-fbaf678acf2b";
pub const TFLITE_MOBILEBERT_FP32: &str = "cc69d69f-6d1f-4a1a-a31e-e021888d0d28";
pub const TFLITE_MOBILENET_V2: &str = "7d45f8e5-bb5e-48d0-928d-8f125104578f";
pub const TFLITE_MOBILENET_V3SMALL: &str = "58855e40-eba9-4a71-b878-6b35e3460244";
pub const TFLITE_PERSON_DETECT_INT8: &str = "bc1338be-e3df-44fd-82e4-40ba9560a073";
pub const TFLITE_EFFICIENTNET_INT8: &str = "4a6f545e-1b4e-41a5-9236-792aa578184b";
pub const TF_MINILM_L12_H384_UNCASED_INT32_SEQLEN128: &str =
    "ecf5c970-ee97-49f0-a4ed-df1f34e9d493";
pub const TF_BERT_FOR_MASKED_LM_FP32_SEQLEN512: &str = "39d157ad-f0ec-4a76-963b-d783beaed60f";
pub const TF_EFFICIENTNET_V2_S_FP32: &str = "ebe7897f-5613-435b-a330-3cb967704e5e";

// Devices.
pub const DEVICE_GCP_C2_STANDARD_16: &str = "9a4804f1-b1b9-46cd-b251-7f16a655f782";
pub const DEVICE_PIXEL_4: &str = "fc901efc-ddf8-44c0-b009-8eecb8286521";
pub const DEVICE_PIXEL_6_PRO: &str = "d4d4e8d2-9ef1-4b3a-9a4c-a1e2f5b8c3d7";
pub const DEVICE_MOTO_EDGE_X30: &str = "05c1e5c4-98b0-4b8c-9a7e-2f6d3b1c8e42";

// Input data.
pub const MODEL_INPUT_DATA_RANDOM: &str = "8d4a034e-944d-4725-8402-d6f6e61be93c";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_are_unique() {
        let ids = [
            IREE_COMPILE_CONFIG_LINUX_CASCADELAKE,
            IREE_MODULE_EXECUTION_CONFIG_LOCAL_SYNC,
            IREE_MODULE_EXECUTION_CONFIG_LOCAL_TASK_BASE,
            TFLITE_DEEPLABV3_FP32,
            TFLITE_MOBILESSD_FP32,
            TFLITE_POSENET_FP32,
            TFLITE_MOBILEBERT_FP32,
            TFLITE_MOBILENET_V2,
            TFLITE_MOBILENET_V3SMALL,
            TFLITE_PERSON_DETECT_INT8,
            TFLITE_EFFICIENTNET_INT8,
            TF_MINILM_L12_H384_UNCASED_INT32_SEQLEN128,
            TF_BERT_FOR_MASKED_LM_FP32_SEQLEN512,
            TF_EFFICIENTNET_V2_S_FP32,
            DEVICE_GCP_C2_STANDARD_16,
            DEVICE_PIXEL_4,
            DEVICE_PIXEL_6_PRO,
            DEVICE_MOTO_EDGE_X30,
            MODEL_INPUT_DATA_RANDOM,
        ];
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
