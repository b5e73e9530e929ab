/// Threshold a grayscale image with Otsu's method
///
/// Returns a new luminance buffer where every pixel is either 0 (dark) or
/// 255 (light). Used as a second reading pass on low-contrast captures.
pub fn otsu_binarize(gray: &[u8]) -> Vec<u8> {
    let threshold = calculate_otsu_threshold(gray);
    threshold_binarize(gray, threshold)
}

/// Simple global threshold binarization: pixels below `threshold` become 0
pub fn threshold_binarize(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter()
        .map(|&pixel| if pixel < threshold { 0 } else { 255 })
        .collect()
}

/// Calculate Otsu's optimal threshold
pub fn calculate_otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total = gray.len() as f64;
    if total == 0.0 {
        return 128;
    }
    let total_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut below_count = 0.0f64;
    let mut below_sum = 0.0f64;
    let mut max_variance = 0.0f64;
    let mut optimal_threshold = 128u8;

    // Classes are [0, t) and [t, 255]
    for t in 1..=255usize {
        let count = histogram[t - 1] as f64;
        below_count += count;
        below_sum += (t - 1) as f64 * count;

        let above_count = total - below_count;
        if below_count == 0.0 || above_count == 0.0 {
            continue;
        }

        let mean_below = below_sum / below_count;
        let mean_above = (total_sum - below_sum) / above_count;
        let variance =
            (below_count / total) * (above_count / total) * (mean_below - mean_above).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = t as u8;
        }
    }

    optimal_threshold
}
