use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::{sigmoid, sigmoid_slope};
use crate::data::record::Record;
use crate::error::{MatrixError, Result};
use crate::layers::dense::Layer;
use crate::loss::bce::BceLoss;
use crate::loss::half_sse::HalfSquaredError;
use crate::math::matrix::Matrix;
use crate::network::forward_pass::ForwardPass;
use crate::network::gradients::Gradients;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn;
use crate::train::train_config::TrainConfig;

/// Two-layer sigmoid network: `I` inputs, `H` hidden units, `O` outputs.
///
/// Parameters are initialized once at construction and afterwards change only
/// through [`update_weights`](Self::update_weights). The most recent
/// [`forward`](Self::forward) call is kept for inspection.
#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    hidden: Layer,
    output: Layer,
    last_pass: Option<ForwardPass>,
}

impl FeedForwardNetwork {
    /// Initializes W1, b1, W2, b2 (in that order) from `rng` with values in
    /// `[0, 0.1)`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> FeedForwardNetwork {
        let hidden = Layer::new(input_size, hidden_size, rng);
        let output = Layer::new(hidden_size, output_size, rng);

        FeedForwardNetwork {
            hidden,
            output,
            last_pass: None,
        }
    }

    pub fn with_seed(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        seed: u64,
    ) -> FeedForwardNetwork {
        let mut rng = StdRng::seed_from_u64(seed);
        FeedForwardNetwork::new(input_size, hidden_size, output_size, &mut rng)
    }

    /// Builds a network from explicit parameters: `w1` is `I x H`, `b1` is
    /// `1 x H`, `w2` is `H x O`, `b2` is `1 x O`.
    pub fn from_parameters(w1: Matrix, b1: Matrix, w2: Matrix, b2: Matrix) -> Result<FeedForwardNetwork> {
        if w1.cols() != w2.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: "from_parameters",
                left: w1.shape(),
                right: w2.shape(),
            });
        }

        Ok(FeedForwardNetwork {
            hidden: Layer::from_parameters(w1, b1)?,
            output: Layer::from_parameters(w2, b2)?,
            last_pass: None,
        })
    }

    pub fn input_size(&self) -> usize {
        self.hidden.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.size()
    }

    pub fn output_size(&self) -> usize {
        self.output.size()
    }

    pub fn w1(&self) -> &Matrix {
        self.hidden.weights()
    }

    pub fn b1(&self) -> &Matrix {
        self.hidden.biases()
    }

    pub fn w2(&self) -> &Matrix {
        self.output.weights()
    }

    pub fn b2(&self) -> &Matrix {
        self.output.biases()
    }

    /// The pass recorded by the most recent [`forward`](Self::forward) call.
    pub fn last_pass(&self) -> Option<&ForwardPass> {
        self.last_pass.as_ref()
    }

    /// Hidden activations `a1` of the most recent forward call.
    pub fn hidden_activations(&self) -> Option<&Matrix> {
        self.last_pass.as_ref().map(|pass| &pass.a1)
    }

    /// Output activations `a2` of the most recent forward call.
    pub fn output_activations(&self) -> Option<&Matrix> {
        self.last_pass.as_ref().map(|pass| &pass.a2)
    }

    /// Runs the network on a `1 x I` row without touching any state.
    pub fn propagate(&self, input: &Matrix) -> Result<ForwardPass> {
        let z1 = self.hidden.pre_activation(input)?;
        let a1 = z1.map(sigmoid);
        let z2 = self.output.pre_activation(&a1)?;
        let a2 = z2.map(sigmoid);

        Ok(ForwardPass {
            input: input.clone(),
            z1,
            a1,
            z2,
            a2,
        })
    }

    /// Forward pass; records the pass for the activation accessors and
    /// returns the `1 x O` prediction.
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        let pass = self.propagate(input)?;
        let output = pass.a2.clone();
        self.record_pass(pass);
        Ok(output)
    }

    /// Stores `pass` as the most recent forward pass.
    pub(crate) fn record_pass(&mut self, pass: ForwardPass) {
        self.last_pass = Some(pass);
    }

    /// Gradients with respect to every parameter. The output error term is
    /// `dZ2 = a2 - expected`, the exact gradient of the cross-entropy
    /// [`BceLoss`] through the output sigmoid.
    ///
    /// `pass` must come from [`propagate`](Self::propagate) on this network
    /// with its current parameters.
    pub fn backward(&self, pass: &ForwardPass, expected: &Matrix) -> Result<Gradients> {
        let dz2 = BceLoss::derivative(&pass.a2, expected)?;
        let (dw2, db2) = self.output.compute_gradients(&dz2, &pass.a1)?;

        let dz1 = self
            .output
            .back_propagate(&dz2)?
            .hadamard(&sigmoid_slope(&pass.a1)?)?;
        let (dw1, db1) = self.hidden.compute_gradients(&dz1, &pass.input)?;

        Ok(Gradients { dw1, db1, dw2, db2 })
    }

    /// Runs a fresh forward pass on `input` and backpropagates it, so the
    /// result never depends on earlier calls.
    pub fn compute_gradients(&self, input: &Matrix, expected: &Matrix) -> Result<Gradients> {
        let pass = self.propagate(input)?;
        self.backward(&pass, expected)
    }

    /// One plain gradient-descent step, in place.
    pub fn update_weights(&mut self, gradients: &Gradients, learning_rate: f64) -> Result<()> {
        self.hidden
            .apply_gradients(&gradients.dw1, &gradients.db1, learning_rate)?;
        self.output
            .apply_gradients(&gradients.dw2, &gradients.db2, learning_rate)?;
        Ok(())
    }

    /// Same step as [`update_weights`](Self::update_weights), returned as a
    /// new network.
    pub fn updated(&self, gradients: &Gradients, learning_rate: f64) -> Result<FeedForwardNetwork> {
        let mut next = self.clone();
        next.update_weights(gradients, learning_rate)?;
        Ok(next)
    }

    /// Half sum of squared errors between two `1 x O` rows. This is the
    /// figure training reports; the gradients follow [`BceLoss`].
    pub fn loss(prediction: &Matrix, actual: &Matrix) -> Result<f64> {
        HalfSquaredError::loss(prediction, actual)
    }

    /// Index of the largest output for one feature row.
    pub fn predict(&self, input: &Matrix) -> Result<usize> {
        Ok(self.propagate(input)?.predicted_class())
    }

    /// Online gradient descent over `records` in the given order. Returns the
    /// mean loss of every epoch.
    pub fn train(&mut self, records: &[Record], config: &TrainConfig) -> Result<Vec<EpochStats>> {
        loop_fn::train_loop(self, records, config)
    }

    /// Percentage of `records` classified correctly; 0 for an empty slice.
    /// Each record goes through [`forward`](Self::forward).
    pub fn evaluate(&mut self, records: &[Record]) -> Result<f64> {
        loop_fn::evaluate(self, records)
    }
}
