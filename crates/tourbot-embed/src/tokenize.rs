use anyhow::{Result, anyhow};
use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;

/// Tokenize a batch of texts into padded `(input_ids, attention_mask)`
/// tensors of shape [B, max_len]. Pad id 1 is `<pad>` in the XLM-R
/// vocabulary this model ships with.
pub fn tokenize_batch(tokenizer: &Tokenizer, texts: &[String], max_len: usize, device: &Device) -> Result<(Tensor, Tensor)> {
    let mut id_rows = Vec::with_capacity(texts.len());
    let mut mask_rows = Vec::with_capacity(texts.len());
    for text in texts {
        let enc = tokenizer.encode(text.as_str(), true).map_err(|e| anyhow!("Tokenization failed: {}", e))?;
        let mut ids = enc.get_ids().to_vec();
        let mut mask = enc.get_attention_mask().to_vec();
        if ids.len() > max_len { ids.truncate(max_len); mask.truncate(max_len); }
        if ids.len() < max_len { let pad = max_len - ids.len(); ids.extend(std::iter::repeat(1u32).take(pad)); mask.extend(std::iter::repeat(0u32).take(pad)); }
        id_rows.push(Tensor::from_iter(ids, device)?);
        mask_rows.push(Tensor::from_iter(mask, device)?);
    }
    let input_ids = Tensor::stack(&id_rows, 0)?;
    let attention_mask = Tensor::stack(&mask_rows, 0)?;
    Ok((input_ids, attention_mask))
}
