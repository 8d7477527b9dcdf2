//! Model catalog: the models benchmarked, grouped by size.

use crate::definitions::{Model, ModelSourceType};
use crate::unique_ids;

const MODEL_ARTIFACTS_URL: &str = "https://storage.googleapis.com/iree-model-artifacts";

/// Named, ordered groups of models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGroups {
    pub small: Vec<Model>,
    pub large: Vec<Model>,
}

impl ModelGroups {
    /// Small models followed by large models. Models listed in both groups
    /// appear twice.
    pub fn all(&self) -> Vec<Model> {
        self.small.iter().chain(self.large.iter()).cloned().collect()
    }
}

fn model(
    id: &str,
    name: &str,
    tags: &[&str],
    source_type: ModelSourceType,
    artifact: &str,
    entry_function: &str,
    input_types: &[&str],
) -> Model {
    Model {
        id: id.to_string(),
        name: name.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        source_type,
        source_url: format!("{}/{}", MODEL_ARTIFACTS_URL, artifact),
        entry_function: entry_function.to_string(),
        input_types: input_types.iter().map(|t| t.to_string()).collect(),
    }
}

fn tflite(id: &str, name: &str, tags: &[&str], artifact: &str, input_types: &[&str]) -> Model {
    model(
        id,
        name,
        tags,
        ModelSourceType::ExportedTflite,
        artifact,
        "main",
        input_types,
    )
}

fn tf(id: &str, name: &str, tags: &[&str], artifact: &str, input_types: &[&str]) -> Model {
    model(
        id,
        name,
        tags,
        ModelSourceType::ExportedTf,
        artifact,
        "forward",
        input_types,
    )
}

pub fn small_models() -> Vec<Model> {
    vec![
        tflite(
            unique_ids::TFLITE_DEEPLABV3_FP32,
            "DeepLabV3_fp32",
            &["fp32"],
            "deeplabv3.tflite",
            &["1x257x257x3xf32"],
        ),
        tflite(
            unique_ids::TFLITE_MOBILESSD_FP32,
            "MobileSSD_fp32",
            &["fp32"],
            "mobile_ssd_v2_float_coco.tflite",
            &["1x320x320x3xf32"],
        ),
        tflite(
            unique_ids::TFLITE_POSENET_FP32,
            "PoseNet_fp32",
            &["fp32"],
            "posenet.tflite",
            &["1x353x257x3xf32"],
        ),
        tflite(
            unique_ids::TFLITE_MOBILEBERT_FP32,
            "MobileBertSquad_fp32",
            &["fp32"],
            "mobilebert-baseline-tf2-float.tflite",
            &["1x384xi32", "1x384xi32", "1x384xi32"],
        ),
        tflite(
            unique_ids::TFLITE_MOBILENET_V2,
            "MobileNetV2_fp32",
            &["fp32", "imagenet"],
            "mobilenet_v2_1.0_224.tflite",
            &["1x224x224x3xf32"],
        ),
        tflite(
            unique_ids::TFLITE_MOBILENET_V3SMALL,
            "MobileNetV3Small_fp32",
            &["fp32", "imagenet"],
            "MobileNetV3SmallStaticBatch.tflite",
            &["1x224x224x3xf32"],
        ),
        tflite(
            unique_ids::TFLITE_PERSON_DETECT_INT8,
            "PersonDetect_int8",
            &["int8"],
            "person_detect.tflite",
            &["1x96x96x1xi8"],
        ),
        tflite(
            unique_ids::TFLITE_EFFICIENTNET_INT8,
            "EfficientNet_int8",
            &["int8"],
            "efficientnet_lite0_int8_2.tflite",
            &["1x224x224x3xui8"],
        ),
    ]
}

pub fn large_models() -> Vec<Model> {
    vec![
        tf(
            unique_ids::TF_MINILM_L12_H384_UNCASED_INT32_SEQLEN128,
            "MiniLML12H384Uncased",
            &["int32", "seqlen128"],
            "minilm-l12-h384-uncased_int32_seqlen128.tar.gz",
            &["1x128xi32", "1x128xi32", "1x128xi32"],
        ),
        tf(
            unique_ids::TF_BERT_FOR_MASKED_LM_FP32_SEQLEN512,
            "BertForMaskedLMTF",
            &["fp32", "seqlen512", "tensorflow"],
            "bert-for-masked-lm-seq512-tf-model.tar.gz",
            &["1x512xi32", "1x512xi32"],
        ),
        tf(
            unique_ids::TF_EFFICIENTNET_V2_S_FP32,
            "EfficientNetV2STF",
            &["fp32", "cnn", "tensorflow"],
            "efficientnet-v2-s-tf-model.tar.gz",
            &["1x384x384x3xf32"],
        ),
    ]
}

pub fn default_model_groups() -> ModelGroups {
    ModelGroups {
        small: small_models(),
        large: large_models(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_concatenates_small_then_large() {
        let groups = default_model_groups();
        let all = groups.all();
        assert_eq!(all.len(), groups.small.len() + groups.large.len());
        assert_eq!(&all[..groups.small.len()], groups.small.as_slice());
        assert_eq!(&all[groups.small.len()..], groups.large.as_slice());
    }

    #[test]
    fn test_all_keeps_duplicates() {
        let shared = small_models().remove(0);
        let groups = ModelGroups {
            small: vec![shared.clone()],
            large: vec![shared.clone()],
        };
        assert_eq!(groups.all(), vec![shared.clone(), shared]);
    }

    #[test]
    fn test_default_models_have_unique_ids() {
        let all = default_model_groups().all();
        let ids: HashSet<&str> = all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_source_urls() {
        let models = small_models();
        assert_eq!(
            models[0].source_url,
            "https://storage.googleapis.com/iree-model-artifacts/deeplabv3.tflite"
        );
        assert!(large_models()
            .iter()
            .all(|m| m.source_type == ModelSourceType::ExportedTf));
    }
}
