//all the methods of calculating averages and variances etc.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance(&self) -> f64
    {
        self.var
    }

    /// variance of the mean estimate, `var / n`
    pub fn variance_of_mean(&self, samples: usize) -> f64
    {
        if samples == 0 {
            f64::NAN
        } else {
            self.var / samples as f64
        }
    }

    /// `frac` divides every value first, e.g. the system size to get fractions.
    /// NaN for an empty slice.
    pub fn from_slice(slice: &[u32], frac: Option<f64>) -> Self
    {
        let mean = calc_average(slice, frac);
        let var = calc_variance(slice, mean, frac);
        Self{
            mean,
            var
        }
    }
}

pub fn calc_average(slice: &[u32], frac: Option<f64>) -> f64
{
    if slice.is_empty() {
        return f64::NAN;
    }
    let sum: u64 = slice.iter().map(|&v| v as u64).sum();

    let len = slice.len() as u64;
    let rest = sum % len;
    let div = sum / len;

    let res = div as f64 + (rest as f64) / (len as f64);
    match frac{
        None => res,
        Some(f) => res / f
    }
}

pub fn calc_variance(slice: &[u32], average: f64, frac: Option<f64>) -> f64
{
    if slice.is_empty() {
        return f64::NAN;
    }
    let scale = frac.unwrap_or(1.0);
    let var_sum: f64 = slice.iter()
        .map(
            |&val|
            {
                let dif = average - val as f64 / scale;
                dif * dif
            }
        ).sum();

    var_sum / slice.len() as f64
}
